use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chalkboard")]
#[command(about = "Worked algorithm demos: depth-first traversal and selection sort")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk the example graph depth-first from node C, one node per line
    Traverse,

    /// Print the example numbers, selection-sort them in place, print again
    Sort,

    /// Tile four example windows bspwm-style, then remove one and re-tile
    Bsp,
}
