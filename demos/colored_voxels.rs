use voxmap::{BoundsStyle, FeatureCloud, MappingConfig, Rgba, StandardGeometry, VoxelMapping};

fn main() {
    env_logger::init();

    // A colored sphere shell sampled on a lat/long lattice
    let mut cloud = FeatureCloud::new(3);
    let steps = 60;
    for a in 0..steps {
        for b in 0..steps {
            let theta = a as f32 / steps as f32 * std::f32::consts::PI;
            let phi = b as f32 / steps as f32 * std::f32::consts::TAU;
            let p = [
                0.5 + 0.4 * theta.sin() * phi.cos(),
                0.5 + 0.4 * theta.sin() * phi.sin(),
                0.5 + 0.4 * theta.cos(),
            ];
            cloud.push(p, &[p[0], p[1], p[2]]);
        }
    }
    // One stray point well outside the grid, dropped during rasterization
    cloud.push([5.0, 5.0, 5.0], &[1.0, 1.0, 1.0]);
    println!("Input cloud: {} points", cloud.len());

    let config = MappingConfig::new([0.0; 3], 1.0 / 32.0, 32, 3);
    let mut mapping = match VoxelMapping::new(config) {
        Ok(mapping) => mapping,
        Err(err) => {
            eprintln!("invalid grid: {err}");
            std::process::exit(1);
        }
    };
    if let Err(err) = mapping.add_cloud(&cloud) {
        eprintln!("rasterization failed: {err}");
        std::process::exit(1);
    }
    println!("Occupied voxels: {}", mapping.grid().occupied_count());

    let boxes = match mapping.as_boxes(&StandardGeometry) {
        Ok(boxes) => boxes,
        Err(err) => {
            eprintln!("mesh synthesis failed: {err}");
            std::process::exit(1);
        }
    };
    println!(
        "Box mesh: {} vertices, {} faces",
        boxes.vertex_count(),
        boxes.face_count()
    );

    let bounds = boxes.bounds();
    println!("Mesh bounds: min={:?}, max={:?}", bounds.min, bounds.max);

    let helpers = mapping.as_bbox(
        &StandardGeometry,
        BoundsStyle {
            face_color: Some(Rgba::new(0.5, 0.5, 1.0, 0.1)),
            ..BoundsStyle::default()
        },
    );
    println!("Bounds helpers: {} primitives", helpers.len());
}
