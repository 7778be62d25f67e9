use colored::Colorize;
use gl2d_math::{Mat3, Scalar, Vec2};

/// Formats `m` in math layout: row `r` lists column-major elements
/// `r`, `r + 3` and `r + 6`.
pub fn format_matrix<T: Scalar>(m: &Mat3<T>) -> String {
    (0..3)
        .map(|row| {
            let cells: String = (0..3)
                .map(|col| format!("{:>12.6}", m[col * 3 + row].to_f64()))
                .collect();

            format!("[{cells} ]\n")
        })
        .collect()
}

pub fn format_cols<T: Scalar>(m: &Mat3<T>) -> String {
    let cells: Vec<String> = m
        .as_slice()
        .iter()
        .map(|v| format!("{}", v.to_f64()))
        .collect();

    format!("[{}]", cells.join(", "))
}

/// Whether a clip-space point falls inside the visible `[-1, 1]` square.
pub fn in_clip_space<T: Scalar>(p: Vec2<T>) -> bool {
    let (x, y) = (p.x.to_f64(), p.y.to_f64());
    (-1.0..=1.0).contains(&x) && (-1.0..=1.0).contains(&y)
}

pub fn print_matrix<T: Scalar>(m: &Mat3<T>) {
    println!("\n{}", "Matrix (rows):".bold());
    print!("{}", format_matrix(m));
    println!("{} {}", "Column-major:".bold(), format_cols(m).dimmed());
}

pub fn print_points<T: Scalar>(m: &Mat3<T>, points: &[Vec2<T>]) {
    if points.is_empty() {
        return;
    }

    println!("\n{}", "Points (pixel -> clip):".bold());
    for &p in points {
        let mapped = m.transform_point(p);
        let coords = format!("({:.6}, {:.6})", mapped.x.to_f64(), mapped.y.to_f64());
        let coords = if in_clip_space(mapped) { coords.green() } else { coords.yellow() };

        println!("  ({}, {}) -> {}", p.x.to_f64(), p.y.to_f64(), coords);
    }
}
