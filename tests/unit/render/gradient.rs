use super::*;

fn within_one(a: Rgb8, b: Rgb8) -> bool {
    a.r.abs_diff(b.r) <= 1 && a.g.abs_diff(b.g) <= 1 && a.b.abs_diff(b.b) <= 1
}

#[test]
fn vertical_endpoints() {
    let c1 = Rgb8::hex(0xF0E6FF);
    let c2 = Rgb8::hex(0xBA55D3);
    let img = linear_gradient(600, 840, c1, c2, GradientDirection::Vertical);
    assert_eq!(img.dimensions(), (600, 840));
    assert_eq!(img.get_pixel(0, 0).0, c1.to_array());
    assert_eq!(img.get_pixel(599, 0).0, c1.to_array());
    let last = img.get_pixel(300, 839).0;
    assert!(within_one(Rgb8::new(last[0], last[1], last[2]), c2));
}

#[test]
fn horizontal_varies_per_column_only() {
    let img = linear_gradient(
        300,
        4,
        Rgb8::BLACK,
        Rgb8::WHITE,
        GradientDirection::Horizontal,
    );
    for x in [0u32, 17, 150, 299] {
        let top = img.get_pixel(x, 0);
        assert_eq!(top, img.get_pixel(x, 3));
    }
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
    assert!(img.get_pixel(299, 0).0[0] >= 254);
}

#[test]
fn channels_truncate_toward_first_color() {
    // 255 * 1 / 2 = 127.5 truncates to 127; descending 255 - 127.5 = 127.5 truncates to 127.
    assert_eq!(
        gradient_color(Rgb8::BLACK, Rgb8::WHITE, 1, 2),
        Rgb8::new(127, 127, 127)
    );
    assert_eq!(
        gradient_color(Rgb8::WHITE, Rgb8::BLACK, 1, 2),
        Rgb8::new(127, 127, 127)
    );
}

#[test]
fn gradient_is_deterministic() {
    let a = linear_gradient(
        37,
        19,
        Rgb8::hex(0x123456),
        Rgb8::hex(0xFEDCBA),
        GradientDirection::Vertical,
    );
    let b = linear_gradient(
        37,
        19,
        Rgb8::hex(0x123456),
        Rgb8::hex(0xFEDCBA),
        GradientDirection::Vertical,
    );
    assert_eq!(a, b);
}

#[test]
fn short_extent_stops_short_of_second_color() {
    let img = linear_gradient(1, 80, Rgb8::BLACK, Rgb8::WHITE, GradientDirection::Vertical);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
    // 255 * 79 / 80 truncates to 251.
    assert_eq!(img.get_pixel(0, 79).0, [251, 251, 251]);
}
