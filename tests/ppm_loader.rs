use std::io::Write;

use terrain_planner::types::{RGB_LEVEL_1, RGB_LEVEL_4, RGB_ROBOT_PATH, RGB_WATER};
use terrain_planner::{Coordinate, TerrainClass, TerrainError, load_terrain, plan, save_terrain};

fn write_ppm(file: &mut impl Write, width: u32, height: u32, pixels: &[[u8; 3]]) {
    write!(file, "P6\n# Created by GIMP\n{width} {height}\n255\n").unwrap();
    for px in pixels {
        file.write_all(px).unwrap();
    }
}

#[test]
fn loads_plans_and_writes_route() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("terrain.ppm");
    let output = dir.path().join("terrain_out.ppm");

    // 3x2, water in the middle of the top row
    let mut file = std::fs::File::create(&input).unwrap();
    write_ppm(
        &mut file,
        3,
        2,
        &[
            RGB_LEVEL_1,
            RGB_WATER,
            RGB_LEVEL_1,
            RGB_LEVEL_1,
            RGB_LEVEL_4,
            RGB_LEVEL_1,
        ],
    );
    drop(file);

    let terrain = load_terrain(&input).expect("terrain should load");
    assert_eq!(terrain.width(), 3);
    assert_eq!(terrain.height(), 2);

    let result = plan(Coordinate::new(0, 0), Coordinate::new(0, 2), &terrain);
    assert_eq!(result.cost, 7);
    assert_eq!(result.route.len(), 5);

    save_terrain(&output, &terrain.overlay(&result.route).unwrap()).unwrap();

    let rendered = load_terrain(&output).expect("rendered terrain should load");
    assert_eq!(rendered.count(TerrainClass::RobotPath), 5);
    assert_eq!(rendered.get(Coordinate::new(0, 1)), Some(TerrainClass::Water));

    let raw = std::fs::read(&output).unwrap();
    assert!(raw.starts_with(b"P6"));
    assert!(raw.ends_with(&RGB_ROBOT_PATH));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_terrain(dir.path().join("missing.ppm")).unwrap_err();
    assert!(matches!(err, TerrainError::Io(_)));
}

#[test]
fn non_ppm_input_is_image_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"not an image").unwrap();
    let err = load_terrain(file.path()).unwrap_err();
    assert!(matches!(err, TerrainError::Image(_)));
}
