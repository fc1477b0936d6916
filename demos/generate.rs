use clap::Parser;
use delaunay_dungeon::{
    Edge, Edges, GeneratorBuilder, Map, Observer, Point, PruneReason, Triangulation,
};

/// Generate a dungeon map and print it
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "80")]
    width: usize,

    #[arg(long, default_value = "100")]
    height: usize,

    #[arg(long, default_value = "4")]
    spacing: usize,

    #[arg(long, default_value = "30")]
    max_points: usize,

    /// fixed seed, a random one is drawn when missing
    #[arg(long)]
    seed: Option<u64>,

    /// keep the super triangle and let the pruner drop its edges
    #[arg(long, default_value = "false")]
    keep_super_triangle: bool,

    /// print every generation step
    #[arg(long, default_value = "false")]
    detail: bool,

    /// write a png next to the text output, needs the `draw` feature
    #[arg(long)]
    image: Option<std::path::PathBuf>,
}

struct PrintObserver {
    detail: bool,
    redundant: usize,
    out_of_bounds: usize,
}

impl Observer for PrintObserver {
    fn point_event(&mut self, point: Point, bad_triangles: usize) {
        if self.detail {
            println!("point event: ({}, {}) bad: {bad_triangles}", point.x, point.y);
        }
    }

    fn triangulated(&mut self, triangulation: &Triangulation) {
        println!(
            "triangulated: {} triangles, {} skipped, {} unconnected",
            triangulation.triangles().len(),
            triangulation.skipped_points(),
            triangulation.unconnected_points()
        );
    }

    fn edge_pruned(&mut self, edge: &Edge, reason: PruneReason) {
        match reason {
            PruneReason::OutOfBounds => self.out_of_bounds += 1,
            PruneReason::Redundant => self.redundant += 1,
        }
        if self.detail {
            println!(
                "edge pruned: p:{} q:{} {reason:?}",
                edge.p.as_usize(),
                edge.q.as_usize()
            );
        }
    }

    fn pruned(&mut self, edges: &Edges) {
        println!(
            "pruned: {} kept, {} redundant, {} out of bounds",
            edges.alive_count(),
            self.redundant,
            self.out_of_bounds
        );
    }

    fn carved(&mut self, map: &Map) {
        if self.detail {
            println!("carved {}x{}", map.width(), map.height());
        }
    }
}

fn main() {
    let args = Args::parse();

    let mut builder = GeneratorBuilder::new(args.width, args.height)
        .spacing(args.spacing)
        .max_points(args.max_points)
        .excise_super_triangle(!args.keep_super_triangle);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }

    let generator = match builder.build() {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut observer = PrintObserver {
        detail: args.detail,
        redundant: 0,
        out_of_bounds: 0,
    };
    let map = match generator.generate_with_observer(&mut observer) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    print!("{map}");

    if let Some(path) = args.image {
        save_image(&map, &path);
    }
}

#[cfg(feature = "draw")]
fn save_image(map: &Map, path: &std::path::Path) {
    if let Err(e) = map.to_image(8).save(path) {
        eprintln!("failed to write {}: {e}", path.display());
    }
}

#[cfg(not(feature = "draw"))]
fn save_image(_map: &Map, path: &std::path::Path) {
    eprintln!("{} not written, build with `--features draw`", path.display());
}
