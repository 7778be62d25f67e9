use clap::Parser;
use gl2d_math::{Scalar, Transform2d, Vec2};

#[derive(Parser, Debug)]
#[command(
    name = "gl2d-inspect",
    about = "Inspect the clip-space matrix of a 2D transform",
    long_about = "Composes projection, translation, rotation, scale and origin offset the same way a \
                  redraw does, then prints the resulting column-major matrix and mapped points",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Drawable width in pixels
    #[arg(short = 'W', long, default_value = "800", value_name = "PIXELS")]
    pub width: f64,

    /// Drawable height in pixels
    #[arg(short = 'H', long, default_value = "800", value_name = "PIXELS")]
    pub height: f64,

    /// Translation along x in pixels
    #[arg(long, default_value = "0", value_name = "PIXELS")]
    pub tx: f64,

    /// Translation along y in pixels
    #[arg(long, default_value = "0", value_name = "PIXELS")]
    pub ty: f64,

    /// Rotation angle in degrees
    #[arg(short = 'a', long, default_value = "0", value_name = "DEGREES")]
    pub angle: f64,

    /// Scale along x
    #[arg(long, default_value = "1", value_name = "FACTOR")]
    pub sx: f64,

    /// Scale along y
    #[arg(long, default_value = "1", value_name = "FACTOR")]
    pub sy: f64,

    /// Pivot x, in the geometry's pixel space
    #[arg(long, default_value = "0", value_name = "PIXELS")]
    pub origin_x: f64,

    /// Pivot y, in the geometry's pixel space
    #[arg(long, default_value = "0", value_name = "PIXELS")]
    pub origin_y: f64,

    /// Pixel-space point to map into clip space (repeatable)
    #[arg(
        short = 'p',
        long = "point",
        value_name = "X,Y",
        value_parser = parse_point,
        allow_hyphen_values = true
    )]
    pub points: Vec<(f64, f64)>,

    /// Compute with 32-bit floats, as uploaded to the GPU
    #[arg(long)]
    pub single_precision: bool,
}

/// Parses `"x,y"` into a pair of numbers.
pub fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;

    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate '{}': {e}", v.trim()))
    };

    Ok((parse(x)?, parse(y)?))
}

impl Cli {
    /// Validates the CLI arguments
    pub fn validate(&self) -> Result<(), String> {
        if !(self.width > 0.0 && self.width.is_finite()) {
            return Err("Width must be a positive number".to_string());
        }

        if !(self.height > 0.0 && self.height.is_finite()) {
            return Err("Height must be a positive number".to_string());
        }

        let params = [
            ("tx", self.tx),
            ("ty", self.ty),
            ("angle", self.angle),
            ("sx", self.sx),
            ("sy", self.sy),
            ("origin-x", self.origin_x),
            ("origin-y", self.origin_y),
        ];
        if let Some((name, _)) = params.iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!("--{name} must be a finite number"));
        }

        if let Some((x, y)) = self.points.iter().find(|(x, y)| !(x.is_finite() && y.is_finite())) {
            return Err(format!("Point ({x}, {y}) must have finite coordinates"));
        }

        Ok(())
    }

    /// Transform state described by the arguments.
    pub fn transform<T: Scalar>(&self) -> Transform2d<T> {
        let mut t = Transform2d::new().with_origin(T::from_f64(self.origin_x), T::from_f64(self.origin_y));
        t.set_translation_x(T::from_f64(self.tx));
        t.set_translation_y(T::from_f64(self.ty));
        t.set_angle_degrees(T::from_f64(self.angle));
        t.set_scale_x(T::from_f64(self.sx));
        t.set_scale_y(T::from_f64(self.sy));
        t
    }

    pub fn points<T: Scalar>(&self) -> Vec<Vec2<T>> {
        self.points
            .iter()
            .map(|&(x, y)| Vec2::new(T::from_f64(x), T::from_f64(y)))
            .collect()
    }

    /// Prints a summary of the configuration
    pub fn print_summary(&self) {
        println!("Canvas: {}x{} px", self.width, self.height);
        println!("  Translation: ({}, {})", self.tx, self.ty);
        println!("  Angle: {}°", self.angle);
        println!("  Scale: ({}, {})", self.sx, self.sy);

        if self.origin_x != 0.0 || self.origin_y != 0.0 {
            println!("  Origin: ({}, {})", self.origin_x, self.origin_y);
        }

        if self.single_precision {
            println!("  Precision: f32");
        }
    }
}
