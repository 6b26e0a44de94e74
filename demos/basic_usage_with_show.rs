//! Rectangle area with a printable result type.
//!
//! Reads two unsigned integers from stdin and prints the area. Only `Area`
//! derives `Show`, so only the result can be printed.

use std::io::{self, Read};

use newtype::derivables::Show;
use newtype::{deriving, NewType};

enum WidthTag {}
enum HeightTag {}
enum AreaTag {}

type Width = NewType<u32, WidthTag>;
type Height = NewType<u32, HeightTag>;
type Area = NewType<u32, AreaTag, deriving![Show]>;

struct Rectangle {
    width: Width,
    height: Height,
}

impl Rectangle {
    const fn new(width: Width, height: Height) -> Self {
        Rectangle { width, height }
    }

    fn area(&self) -> Area {
        Area::new(self.width.decay() * self.height.decay())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let mut numbers = input.split_whitespace().map(str::parse::<u32>);

    let w = numbers.next().ok_or("missing width")??;
    let h = numbers.next().ok_or("missing height")??;
    log::debug!("width={w} height={h}");

    let rect = Rectangle::new(Width::new(w), Height::new(h));
    println!("{}", rect.area());
    Ok(())
}
