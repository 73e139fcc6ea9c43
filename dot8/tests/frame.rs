use nanorand::{rand::pcg64::Pcg64 as Rng, RNG};
use rand::Rng as _;

use dot8::frame::{Frame, HEIGHT, WIDTH};

#[test]
fn random_pixels_round_trip() {
    let mut rng = rand::thread_rng();
    let mut frame = Frame::new();
    for _ in 0..256 {
        let (x, y) = (rng.gen_range(0, WIDTH), rng.gen_range(0, HEIGHT));
        frame.set_pixel(x, y, true);
        assert!(frame.get_pixel(x, y));
        frame.set_pixel(x, y, false);
        assert!(!frame.get_pixel(x, y));
    }
    assert_eq!(frame, Frame::new());
}

#[test]
fn random_out_of_range_writes_are_dropped() {
    let mut rng = rand::thread_rng();
    let mut frame = Frame::new();
    frame.set_pixel(4, 4, true);
    let before = frame.clone();
    for _ in 0..256 {
        let x = rng.gen_range(WIDTH, 1024);
        let y = rng.gen_range(0, 1024);
        frame.set_pixel(x, y, true);
        frame.set_pixel(y, x, true);
        assert!(!frame.get_pixel(x, y));
        assert!(!frame.get_pixel(y, x));
    }
    assert_eq!(frame, before);
}

#[test]
fn sprites_only_add_pixels() {
    let mut rng = Rng::new_seed(0xD07);
    for _ in 0..64 {
        let mut frame = Frame::new();
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                frame.set_pixel(x, y, rng.generate::<u8>() & 1 == 1);
            }
        }
        let before = frame.clone();

        let sprite = [rng.generate::<u8>(), rng.generate::<u8>(), rng.generate::<u8>()];
        let x = (rng.generate::<u8>() % 12) as i32 - 2;
        let y = (rng.generate::<u8>() % 12) as i32 - 2;
        frame.draw_sprite(x, y, &sprite, 8, 3);

        for (row_before, row_after) in before.rows().iter().zip(frame.rows().iter()) {
            assert_eq!(row_before & row_after, *row_before);
        }
        for py in 0..HEIGHT as i32 {
            for px in 0..WIDTH as i32 {
                let (sx, sy) = (px - x, py - y);
                let inside = (0..8).contains(&sx) && (0..3).contains(&sy);
                if !inside {
                    assert_eq!(
                        frame.get_pixel(px as usize, py as usize),
                        before.get_pixel(px as usize, py as usize)
                    );
                }
            }
        }
    }
}
