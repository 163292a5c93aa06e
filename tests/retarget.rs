// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! End-to-end checks through the public surface only.

use image::{ImageBuffer, Luma, Rgb, RgbImage};
use seamtarget::{
    calculate_energy, calculate_vertical_seam, remove_horizontal_seams, remove_vertical_seams,
    retarget, retarget_with, transform, CarveError, CumulativeTable,
};

// A busy little scene: a smooth ramp with a flat dark band through
// columns 8..12 that seams should gravitate toward.
fn scene(width: u32, height: u32) -> RgbImage {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            if (8..12).contains(&x) {
                data.extend_from_slice(&[10, 10, 10]);
            } else {
                data.extend_from_slice(&[(x * 11 % 256) as u8, (y * 17 % 256) as u8, 200]);
            }
        }
    }
    ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, data).unwrap()
}

#[test]
fn matching_aspect_skips_carving_entirely() {
    let img = scene(24, 16);
    let retargeted = retarget(&img, 12, 8).unwrap();
    let resized = transform::resize(&img, 12, 8).unwrap();
    assert_eq!(retargeted.into_raw(), resized.into_raw());
}

#[test]
fn retarget_reaches_exact_dimensions_both_ways() {
    let img = scene(24, 16);
    assert_eq!(retarget(&img, 10, 16).unwrap().dimensions(), (10, 16));
    assert_eq!(retarget(&img, 24, 10).unwrap().dimensions(), (24, 10));
    assert_eq!(
        retarget_with(&img, 10, 16, &CumulativeTable)
            .unwrap()
            .dimensions(),
        (10, 16)
    );
}

#[test]
fn seam_removal_preserves_shape_invariants() {
    let img = scene(20, 12);
    let narrower = remove_vertical_seams(&img, 5).unwrap();
    assert_eq!(narrower.dimensions(), (15, 12));
    let shorter = remove_horizontal_seams(&img, 5).unwrap();
    assert_eq!(shorter.dimensions(), (20, 7));
}

#[test]
fn removing_zero_seams_returns_the_image_unchanged() {
    let img = scene(16, 10);
    let out = remove_vertical_seams(&img, 0).unwrap();
    assert_eq!(out.into_raw(), img.into_raw());
}

#[test]
fn seams_span_the_image_and_stay_in_range() {
    let img = scene(20, 12);
    let seam = calculate_vertical_seam(&img).unwrap();
    assert_eq!(seam.len(), 12);
    assert!(seam.iter().all(|x| *x < 20));
    for pair in seam.windows(2) {
        assert!((i64::from(pair[0]) - i64::from(pair[1])).abs() <= 1);
    }
}

#[test]
fn constant_image_has_an_all_zero_energy_map() {
    let img: RgbImage = ImageBuffer::from_pixel(9, 7, Rgb([77, 77, 77]));
    let energy = calculate_energy(&img).unwrap();
    for y in 0..7 {
        for x in 0..9 {
            assert_eq!(energy[(x, y)], 0.0);
        }
    }
}

#[test]
fn grayscale_images_take_the_same_path() {
    let data: Vec<u8> = (0..60).map(|i| (i * 4) as u8).collect();
    let img = ImageBuffer::<Luma<u8>, _>::from_raw(10, 6, data).unwrap();
    let out = retarget(&img, 5, 6).unwrap();
    assert_eq!(out.dimensions(), (5, 6));
}

#[test]
fn infeasible_requests_fail_before_touching_pixels() {
    let img = scene(6, 4);
    assert!(matches!(
        retarget(&img, 0, 0),
        Err(CarveError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        remove_vertical_seams(&img, 6),
        Err(CarveError::InvalidDimensions { .. })
    ));
}
