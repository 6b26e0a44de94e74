//! Rectangle area with dimensions read straight into wrapper types.
//!
//! `Width` and `Height` derive `Read`, so they are extracted from stdin
//! without going through a bare `u32` first.

use std::io;

use newtype::derivables::{Read, Show};
use newtype::{deriving, NewType};

enum WidthTag {}
enum HeightTag {}
enum AreaTag {}

type Width = NewType<u32, WidthTag, deriving![Read]>;
type Height = NewType<u32, HeightTag, deriving![Read]>;
type Area = NewType<u32, AreaTag, deriving![Show]>;

struct Rectangle {
    width: Width,
    height: Height,
}

impl Rectangle {
    fn area(&self) -> Area {
        Area::new(self.width.decay() * self.height.decay())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mut width = Width::default();
    let mut height = Height::default();
    width.read_from(&mut input)?;
    height.read_from(&mut input)?;

    let rect = Rectangle { width, height };
    println!("{}", rect.area());
    Ok(())
}
