extern crate env_logger;
extern crate latticekit;

use latticekit::{GridPointGenerator, Point3};

fn main() {
    env_logger::init();

    println!("Generate points on a grid:");

    let from = Point3::new(0.0f32, 0.0, 0.0);
    let to = Point3::new(0.0f32, 0.2, 2.0);
    let step = Point3::new(1.0f32, 0.1, 1.0);
    let mut grid = GridPointGenerator::new(from, to, step);

    let (nx, ny, nz) = grid.size();
    println!("Size: {} x {} x {} = {} elements", nx, ny, nz, grid.number_of_elements());

    println!("\nAll points in nested vectors:");
    let points = grid.as_vector();
    let nested = points.iter().flat_map(|plane| plane.iter().flat_map(|row| row.iter()));
    for (i, point) in nested.enumerate() {
        println!("{}: ({}, {}, {})", i, point.x, point.y, point.z);
    }

    println!("\nIterate all points:");
    for (i, point) in grid.by_ref().enumerate() {
        println!("{}: ({}, {}, {})", i, point.x, point.y, point.z);
    }

    grid.reset();
    println!("\nFirst point again after reset: {:?}", grid.next());
}
