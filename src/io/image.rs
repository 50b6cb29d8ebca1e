//! Subtile copying between autotile sheets and Tiled sheets
//!
//! Sheets are processed one autotile block at a time. A block is cropped out
//! of the source, converted on its own and pasted into the matching block of
//! the output, so multi-autotile sheets convert in one pass.

use crate::io::configuration::{
    AUTOTILE_TERRAIN_HEIGHT, AUTOTILE_TERRAIN_WIDTH, UNPACK_LAYOUT, UNPACKED_TERRAIN_HEIGHT,
    UNPACKED_TERRAIN_WIDTH,
};
use crate::io::error::{AutotileError, Result, invalid_parameter, invalid_source};
use crate::spatial::grid::CombinationGrid;
use crate::spatial::subtile::SubtileCoord;
use image::{RgbaImage, imageops};
use std::path::Path;

// Row-major quadrant offsets used by the unpack recipes (TL, TR, BL, BR)
const RECIPE_OFFSETS: [(u32, u32); 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

/// Check that a tile size can be split into four equal subtiles
///
/// # Errors
///
/// Returns an error if `tile_size` is zero or odd
pub fn validate_tile_size(tile_size: u32) -> Result<u32> {
    if tile_size == 0 || tile_size % 2 != 0 {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &"must be a positive even number of pixels",
        ));
    }
    Ok(tile_size)
}

fn to_u32(value: usize, parameter: &'static str) -> Result<u32> {
    u32::try_from(value).map_err(|e| invalid_parameter(parameter, &value, &e))
}

// Pixel extent of `count` tiles; huge tile sizes must not wrap around
fn tiles_to_pixels(count: u32, tile_size: u32) -> Result<u32> {
    count
        .checked_mul(tile_size)
        .ok_or_else(|| {
            invalid_parameter("tile_size", &tile_size, &"too large for the output sheet")
        })
}

fn copy_subtile(
    source: &RgbaImage,
    target: &mut RgbaImage,
    subtile: SubtileCoord,
    destination: (u32, u32),
    subtile_size: u32,
) -> Result<()> {
    let outside = || {
        invalid_source(&format!(
            "subtile {subtile} lies outside the {}x{} px autotile",
            source.width(),
            source.height()
        ))
    };
    let left = subtile.column.checked_mul(subtile_size).ok_or_else(outside)?;
    let upper = subtile.row.checked_mul(subtile_size).ok_or_else(outside)?;
    let fits = |start: u32, limit: u32| {
        start
            .checked_add(subtile_size)
            .is_some_and(|end| end <= limit)
    };
    if !fits(left, source.width()) || !fits(upper, source.height()) {
        return Err(outside());
    }

    let patch = imageops::crop_imm(source, left, upper, subtile_size, subtile_size).to_image();
    imageops::replace(
        target,
        &patch,
        i64::from(destination.0),
        i64::from(destination.1),
    );
    Ok(())
}

/// Assemble one tile per grid cell from the subtiles of a single autotile
///
/// Padding cells stay fully transparent.
///
/// # Errors
///
/// Returns an error if the tile size is invalid or a combination references
/// a subtile outside `source`
pub fn render_combinations(
    source: &RgbaImage,
    grid: &CombinationGrid,
    tile_size: u32,
) -> Result<RgbaImage> {
    let tile_size = validate_tile_size(tile_size)?;
    let subtile_size = tile_size / 2;
    let shape = grid.shape();
    let mut target = RgbaImage::new(
        tiles_to_pixels(to_u32(shape.width, "grid width")?, tile_size)?,
        tiles_to_pixels(to_u32(shape.height, "grid height")?, tile_size)?,
    );

    for ([x, y], combination) in grid.iter_cells() {
        let tile_x = to_u32(x, "grid column")? * tile_size;
        let tile_y = to_u32(y, "grid row")? * tile_size;
        for (quadrant, subtile) in combination.quadrants() {
            let (offset_x, offset_y) = quadrant.offset();
            copy_subtile(
                source,
                &mut target,
                subtile,
                (
                    tile_x + offset_x * subtile_size,
                    tile_y + offset_y * subtile_size,
                ),
                subtile_size,
            )?;
        }
    }

    Ok(target)
}

fn convert_blocks<F>(
    source: &RgbaImage,
    block_size: (u32, u32),
    output_block_size: (u32, u32),
    mut convert: F,
) -> Result<RgbaImage>
where
    F: FnMut(&RgbaImage) -> Result<RgbaImage>,
{
    let (block_width, block_height) = block_size;
    let (output_width, output_height) = output_block_size;
    let num_x = source.width() / block_width;
    let num_y = source.height() / block_height;
    if num_x == 0 || num_y == 0 {
        return Err(invalid_source(&format!(
            "sheet of {}x{} px is smaller than one {block_width}x{block_height} px autotile",
            source.width(),
            source.height()
        )));
    }

    let too_many = || {
        invalid_source(&format!(
            "{num_x}x{num_y} autotiles overflow the output sheet"
        ))
    };
    let mut target = RgbaImage::new(
        output_width.checked_mul(num_x).ok_or_else(too_many)?,
        output_height.checked_mul(num_y).ok_or_else(too_many)?,
    );
    for y in 0..num_y {
        for x in 0..num_x {
            let block =
                imageops::crop_imm(source, block_width * x, block_height * y, block_width, block_height)
                    .to_image();
            let converted = convert(&block)?;
            imageops::replace(
                &mut target,
                &converted,
                i64::from(output_width * x),
                i64::from(output_height * y),
            );
        }
    }
    Ok(target)
}

/// Render every autotile of a sheet through a combination grid
///
/// `block_tiles` is the autotile size in tiles (2x2 for walls, 2x3 for
/// terrain).
///
/// # Errors
///
/// Returns an error if the sheet holds no complete autotile or a combination
/// references a subtile outside its block
pub fn render_sheet(
    source: &RgbaImage,
    grid: &CombinationGrid,
    block_tiles: (u32, u32),
    tile_size: u32,
) -> Result<RgbaImage> {
    let tile_size = validate_tile_size(tile_size)?;
    let shape = grid.shape();
    convert_blocks(
        source,
        (
            tiles_to_pixels(block_tiles.0, tile_size)?,
            tiles_to_pixels(block_tiles.1, tile_size)?,
        ),
        (
            tiles_to_pixels(to_u32(shape.width, "grid width")?, tile_size)?,
            tiles_to_pixels(to_u32(shape.height, "grid height")?, tile_size)?,
        ),
        |block| render_combinations(block, grid, tile_size),
    )
}

/// Convert a single terrain autotile into the fixed 3x5 unpacked layout
///
/// The preview tile is copied to the top-left corner as is.
///
/// # Errors
///
/// Returns an error if the tile size is invalid or `source` is smaller than
/// a terrain autotile
pub fn unpack_block(source: &RgbaImage, tile_size: u32) -> Result<RgbaImage> {
    let tile_size = validate_tile_size(tile_size)?;
    let subtile_size = tile_size / 2;
    let mut target = RgbaImage::new(
        tiles_to_pixels(UNPACKED_TERRAIN_WIDTH, tile_size)?,
        tiles_to_pixels(UNPACKED_TERRAIN_HEIGHT, tile_size)?,
    );

    if source.width() < tile_size || source.height() < tile_size {
        return Err(invalid_source(&"autotile is smaller than its preview tile"));
    }
    let preview = imageops::crop_imm(source, 0, 0, tile_size, tile_size).to_image();
    imageops::replace(&mut target, &preview, 0, 0);

    for (subtiles, [tile_x, tile_y]) in UNPACK_LAYOUT {
        for (subtile, (offset_x, offset_y)) in subtiles.into_iter().zip(RECIPE_OFFSETS) {
            copy_subtile(
                source,
                &mut target,
                subtile,
                (
                    tile_x * tile_size + offset_x * subtile_size,
                    tile_y * tile_size + offset_y * subtile_size,
                ),
                subtile_size,
            )?;
        }
    }

    Ok(target)
}

/// Unpack every terrain autotile of a sheet
///
/// # Errors
///
/// Returns an error if the sheet holds no complete terrain autotile
pub fn unpack_terrain(source: &RgbaImage, tile_size: u32) -> Result<RgbaImage> {
    let tile_size = validate_tile_size(tile_size)?;
    convert_blocks(
        source,
        (
            tiles_to_pixels(AUTOTILE_TERRAIN_WIDTH, tile_size)?,
            tiles_to_pixels(AUTOTILE_TERRAIN_HEIGHT, tile_size)?,
        ),
        (
            tiles_to_pixels(UNPACKED_TERRAIN_WIDTH, tile_size)?,
            tiles_to_pixels(UNPACKED_TERRAIN_HEIGHT, tile_size)?,
        ),
        |block| unpack_block(block, tile_size),
    )
}

/// Load an image from disk as RGBA
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path).map_err(|e| AutotileError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(image.to_rgba8())
}

/// Save an image, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be encoded
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AutotileError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(path).map_err(|e| AutotileError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

