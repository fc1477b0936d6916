use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{
    carve::carve,
    delaunay::triangulate_with_observer,
    edge::Edges,
    error::Error,
    map::Map,
    observer::Observer,
    prune::prune,
    sampler::sample,
    Result,
};

/// Everything a generation run depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    /// grid step points snap to, also scales room sizes
    pub spacing: usize,
    /// number of sampled points
    pub max_points: usize,
    /// sampling margin in multiples of `spacing`
    pub border_factor: usize,
    /// triangle buffer size in multiples of `max_points`
    pub triangle_capacity_factor: usize,
    /// edge buffer size in multiples of `max_points`
    pub edge_capacity_factor: usize,
    /// drop triangles touching the super triangle right after triangulation,
    /// otherwise their edges are left to the pruner's bounds rule
    pub excise_super_triangle: bool,
    /// `None` draws a seed from the operating system
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 100,
            spacing: 4,
            max_points: 30,
            border_factor: 3,
            triangle_capacity_factor: 9,
            edge_capacity_factor: 27,
            excise_super_triangle: true,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn border(&self) -> usize {
        self.border_factor.saturating_mul(self.spacing)
    }

    pub fn triangle_capacity(&self) -> usize {
        self.triangle_capacity_factor.saturating_mul(self.max_points)
    }

    pub fn edge_capacity(&self) -> usize {
        self.edge_capacity_factor.saturating_mul(self.max_points)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.spacing == 0 {
            return Err(Error::InvalidSpacing);
        }
        if self.max_points == 0 {
            return Err(Error::InvalidMaxPoints);
        }
        let border = self.border();
        if border >= self.width || border >= self.height {
            return Err(Error::BorderTooWide {
                border,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Builder for [`Generator`]
#[derive(Debug, Clone, Default)]
pub struct GeneratorBuilder {
    config: GeneratorConfig,
}

impl GeneratorBuilder {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            config: GeneratorConfig {
                width,
                height,
                ..Default::default()
            },
        }
    }

    pub fn spacing(mut self, spacing: usize) -> Self {
        self.config.spacing = spacing;
        self
    }

    pub fn max_points(mut self, max_points: usize) -> Self {
        self.config.max_points = max_points;
        self
    }

    pub fn border_factor(mut self, factor: usize) -> Self {
        self.config.border_factor = factor;
        self
    }

    pub fn capacity_factors(mut self, triangles: usize, edges: usize) -> Self {
        self.config.triangle_capacity_factor = triangles;
        self.config.edge_capacity_factor = edges;
        self
    }

    pub fn excise_super_triangle(mut self, excise: bool) -> Self {
        self.config.excise_super_triangle = excise;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Validate the configuration and build the generator.
    pub fn build(self) -> Result<Generator> {
        Generator::new(self.config)
    }
}

/// Runs the whole pipeline: sample, triangulate, extract edges, prune, carve.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate(&self) -> Result<Map> {
        self.generate_with_observer(&mut ())
    }

    pub fn generate_with_observer<O: Observer>(&self, observer: &mut O) -> Result<Map> {
        let config = &self.config;
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let (width, height) = (config.width, config.height);
        let points = sample(
            width,
            height,
            config.max_points,
            config.spacing,
            config.border(),
            &mut rng,
        );

        let mut triangulation = triangulate_with_observer(
            &points,
            width,
            height,
            config.triangle_capacity(),
            observer,
        )?;
        if config.excise_super_triangle {
            triangulation.remove_super_triangle();
        }
        observer.triangulated(&triangulation);

        let mut edges = Edges::from_triangulation(&triangulation, config.edge_capacity())?;
        prune(&mut edges, triangulation.points(), width, height, observer);

        let mut map = Map::new(width, height);
        carve(&mut map, &edges, triangulation.points(), config.spacing, &mut rng);
        observer.carved(&map);

        tracing::debug!(width, height, seed = ?config.seed, "map generated");
        Ok(map)
    }
}

/// Generate a map with default capacities and a fixed seed.
pub fn generate(
    width: usize,
    height: usize,
    spacing: usize,
    max_points: usize,
    seed: u64,
) -> Result<Map> {
    GeneratorBuilder::new(width, height)
        .spacing(spacing)
        .max_points(max_points)
        .seed(seed)
        .build()?
        .generate()
}
