//! Command-line interface for printing tables and converting PNG sheets

use crate::algorithm::pipeline::{AutotileTables, subtile_combinations};
use crate::io::configuration::{
    AUTOTILE_TERRAIN_HEIGHT, AUTOTILE_TERRAIN_WIDTH, AUTOTILE_WALL_HEIGHT, AUTOTILE_WALL_WIDTH,
    DEFAULT_TILE_SIZE, TERRAIN_OUTPUT_SUFFIX, UNPACK_OUTPUT_SUFFIX, WALL_OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::format::{TableSection, format_tables};
use crate::io::image::{load_rgba, render_sheet, save_png, unpack_terrain, validate_tile_size};
use crate::io::progress::ProgressManager;
use clap::{Args, Parser, Subcommand, ValueEnum};
use image::RgbaImage;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "autotile-combos")]
#[command(
    author,
    version,
    about = "Generate Tiled autotile combination tables and sheets"
)]
/// Command-line arguments for the autotile tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available operations
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the wall and terrain combination tables
    Tables {
        /// Tables to print
        #[arg(short, long, value_enum, default_value_t = TableSection::Both)]
        section: TableSection,
    },

    /// Render Tiled sheets from autotile source sheets
    Render {
        /// Shared sheet options
        #[command(flatten)]
        sheets: SheetArgs,

        /// Kind of autotile in the source sheets
        #[arg(short, long, value_enum, default_value_t = SheetKind::Terrain)]
        kind: SheetKind,
    },

    /// Unpack terrain autotiles into the fixed 3x5 layout
    Unpack {
        /// Shared sheet options
        #[command(flatten)]
        sheets: SheetArgs,
    },
}

/// Options shared by the sheet conversions
#[derive(Args, Debug, Clone)]
pub struct SheetArgs {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Tile edge length in pixels (subtiles are half of it)
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl SheetArgs {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Autotile layouts found in source sheets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SheetKind {
    /// 2x2-tile wall autotiles, rendered to a 4x4 grid
    Wall,
    /// 2x3-tile terrain autotiles, rendered to a 7x7 grid
    Terrain,
}

impl SheetKind {
    /// Autotile block size in tiles
    pub const fn block_tiles(self) -> (u32, u32) {
        match self {
            Self::Wall => (AUTOTILE_WALL_WIDTH, AUTOTILE_WALL_HEIGHT),
            Self::Terrain => (AUTOTILE_TERRAIN_WIDTH, AUTOTILE_TERRAIN_HEIGHT),
        }
    }

    /// Suffix appended to the output file stem
    pub const fn output_suffix(self) -> &'static str {
        match self {
            Self::Wall => WALL_OUTPUT_SUFFIX,
            Self::Terrain => TERRAIN_OUTPUT_SUFFIX,
        }
    }
}

/// Conversion applied to each sheet
#[derive(Debug, Clone)]
pub enum Conversion {
    /// Render through the generated combination tables
    Render {
        /// Layout of the source sheets
        kind: SheetKind,
        /// Tables derived once for the whole batch
        tables: AutotileTables,
    },
    /// Static-layout terrain unpacking
    Unpack,
}

impl Conversion {
    /// Suffix appended to the output file stem
    pub const fn output_suffix(&self) -> &'static str {
        match self {
            Self::Render { kind, .. } => kind.output_suffix(),
            Self::Unpack => UNPACK_OUTPUT_SUFFIX,
        }
    }

    /// Convert a whole source sheet
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet doesn't fit the autotile layout
    pub fn convert(&self, source: &RgbaImage, tile_size: u32) -> Result<RgbaImage> {
        match self {
            Self::Render { kind, tables } => {
                let grid = match kind {
                    SheetKind::Wall => &tables.wall,
                    SheetKind::Terrain => &tables.terrain,
                };
                render_sheet(source, grid, kind.block_tiles(), tile_size)
            }
            Self::Unpack => unpack_terrain(source, tile_size),
        }
    }
}

/// Run the command selected on the command line
///
/// # Errors
///
/// Returns an error if table derivation or any sheet conversion fails
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Tables { section } => {
            let tables = subtile_combinations()?;
            print_tables(&format_tables(&tables, section));
            Ok(())
        }
        Command::Render { sheets, kind } => {
            let tables = subtile_combinations()?;
            FileProcessor::new(sheets, Conversion::Render { kind, tables }).process()
        }
        Command::Unpack { sheets } => FileProcessor::new(sheets, Conversion::Unpack).process(),
    }
}

/// Orchestrates batch conversion of PNG sheets with progress tracking
pub struct FileProcessor {
    args: SheetArgs,
    conversion: Conversion,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor for the given options and conversion
    pub fn new(args: SheetArgs, conversion: Conversion) -> Self {
        let progress_manager = args.should_show_progress().then(ProgressManager::new);

        Self {
            args,
            conversion,
            progress_manager,
        }
    }

    /// Convert every selected sheet
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        validate_tile_size(self.args.tile_size)?;
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.args.target;
        if target.is_file() {
            if is_png(target) {
                Ok(self
                    .should_process_file(target)
                    .then(|| target.clone())
                    .into_iter()
                    .collect())
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"file must be a PNG image",
                ))
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if is_png(&path)
                    && !is_generated_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.args.skip_existing() {
            return true;
        }

        let output_path = self.output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.args.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let source = load_rgba(input_path)?;
        let converted = self.conversion.convert(&source, self.args.tile_size)?;
        save_png(&converted, &self.output_path(input_path))?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(start_time.elapsed());
        }

        Ok(())
    }

    /// Output file written for `input_path`
    pub fn output_path(&self, input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.png",
            stem.to_string_lossy(),
            self.conversion.output_suffix()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

// Tables are the program output
#[allow(clippy::print_stdout)]
fn print_tables(text: &str) {
    print!("{text}");
}

// Outputs land next to their inputs, so a directory may hold the results of
// any conversion; none of them are sources
fn is_generated_output(path: &Path) -> bool {
    path.file_stem().is_some_and(|stem| {
        let stem = stem.to_string_lossy();
        [WALL_OUTPUT_SUFFIX, TERRAIN_OUTPUT_SUFFIX, UNPACK_OUTPUT_SUFFIX]
            .into_iter()
            .any(|suffix| stem.ends_with(suffix))
    })
}

fn is_png(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("png")
}
