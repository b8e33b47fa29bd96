use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct Config {
    #[command(flatten)]
    pub game: GameParams,
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub panel: PanelParams,
}

/// Shape of the contest: how many fronts there are and how many units
/// each side gets to spread across them.
#[derive(Args, Debug, Clone)]
pub struct GameParams {
    #[arg(long, default_value_t = 10)]
    pub fronts: usize,
    #[arg(long, default_value_t = 100)]
    pub population: u32,
}

#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    /// Size of the evolving pool of strategies.
    #[arg(long, default_value_t = 100)]
    pub pool_size: usize,

    /// Percentage of the pool kept as parents each generation.
    #[arg(long, default_value_t = 10)]
    pub keep_percent: usize,

    /// Upper bound on single-unit transfers per mutation.
    #[arg(long, default_value_t = 2)]
    pub max_mutations: u32,

    /// Generation count for fixed-length runs.
    #[arg(long, default_value_t = 50)]
    pub generations: usize,

    /// Consecutive non-improving generations tolerated in retry mode.
    #[arg(long, default_value_t = 10)]
    pub retries: usize,
}

#[derive(Args, Debug, Clone)]
pub struct PanelParams {
    /// Opponents in a plain random panel.
    #[arg(long, default_value_t = 1000)]
    pub panel_size: usize,

    /// Opponents in a hardened ("crazy") panel.
    #[arg(long, default_value_t = 100)]
    pub crazy_panel_size: usize,

    /// Minimizer fitness each hardened opponent is pushed towards.
    /// Rarity starts near 1 for the weakest shapes, so a demanding
    /// threshold is several orders of magnitude above that.
    #[arg(long, default_value_t = 1_000_000.0)]
    pub crazy_min_fitness: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameParams {
                fronts: 10,
                population: 100,
            },
            search: SearchParams {
                pool_size: 100,
                keep_percent: 10,
                max_mutations: 2,
                generations: 50,
                retries: 10,
            },
            panel: PanelParams {
                panel_size: 1000,
                crazy_panel_size: 100,
                crazy_min_fitness: 1_000_000.0,
            },
        }
    }
}
