//! Print label rectangles for a few random star-shaped clusters.
//!
//! Usage:
//!   cargo run -p labelrect --example star_labels -- [count] [seed]
//!
//! Each line shows the ring's vertex count, its bbox area, the rectangle and
//! the fill ratio rect/bbox.

use labelrect::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let count: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(5);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);
    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 6, max: 18 },
        base_radius: 1.0,
        center: Point::new(-73.9, 40.7),
        ..RadialCfg::default()
    };
    let search = SearchCfg::default();
    for index in 0..count {
        let tok = ReplayToken { seed, index };
        let Some(ring) = draw_star_ring(cfg, tok) else {
            eprintln!("sample {index}: invalid ring");
            continue;
        };
        let bbox = ring.bounds().area();
        match largest_inscribed_rect_with(&ring, &search, &mut tok.to_std_rng()) {
            Ok(c) => println!(
                "sample {index}: V={}, bbox={bbox:.3}, rect=[{:.4}, {:.4}] x [{:.4}, {:.4}], fill={:.2}",
                ring.len(),
                c.rect.min_x,
                c.rect.max_x,
                c.rect.min_y,
                c.rect.max_y,
                c.area / bbox
            ),
            Err(e) => println!("sample {index}: V={}, {e}", ring.len()),
        }
    }
}
