use super::*;

use crate::foundation::core::Rgb8;

#[test]
fn mark_counts_per_pattern() {
    let size = CanvasSize::CARD;
    assert!(scatter(TexturePattern::None, size, 1).is_empty());
    assert_eq!(scatter(TexturePattern::Stars, size, 1).len(), 20);
    assert_eq!(scatter(TexturePattern::Lightning, size, 1).len(), 10);
    assert_eq!(scatter(TexturePattern::Flame, size, 1).len(), 15);
    assert_eq!(scatter(TexturePattern::Geometric, size, 1).len(), 25);
}

#[test]
fn same_seed_same_marks() {
    let a = scatter(TexturePattern::Lightning, CanvasSize::CARD, 99);
    let b = scatter(TexturePattern::Lightning, CanvasSize::CARD, 99);
    let c = scatter(TexturePattern::Lightning, CanvasSize::CARD, 100);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn marks_respect_their_ranges() {
    for seed in 0..20 {
        for mark in scatter(TexturePattern::Lightning, CanvasSize::CARD, seed) {
            let TextureMark::Segment { from, to, .. } = mark else {
                panic!("lightning yields segments");
            };
            assert!((0..=600).contains(&from.0) && (0..=840).contains(&from.1));
            assert!((to.0 - from.0).abs() <= 20);
            assert!((10..=30).contains(&(to.1 - from.1)));
        }
        for mark in scatter(TexturePattern::Flame, CanvasSize::CARD, seed) {
            let TextureMark::Dot { radius, color, .. } = mark else {
                panic!("flame yields dots");
            };
            assert!((2..=5).contains(&radius));
            assert_eq!(color.a, 25);
        }
    }
}

#[test]
fn untextured_background_is_untouched() {
    let mut bg = image::RgbImage::from_pixel(60, 80, image::Rgb(Rgb8::hex(0xFFF0F5).to_array()));
    let before = bg.clone();
    assert_eq!(apply_texture(&mut bg, TexturePattern::None, 5).unwrap(), 0);
    assert_eq!(bg, before);
}

#[test]
fn texture_only_lightens_dark_background() {
    let mut bg = image::RgbImage::from_pixel(200, 200, image::Rgb([0, 0, 0]));
    let n = apply_texture(&mut bg, TexturePattern::Geometric, 3).unwrap();
    assert_eq!(n, 25);
    let lit = bg.pixels().filter(|p| p.0 != [0, 0, 0]).count();
    assert!(lit > 0);
    assert!(
        bg.pixels()
            .all(|p| p.0[0] == p.0[1] && p.0[1] == p.0[2] && p.0[0] < 128)
    );
}
