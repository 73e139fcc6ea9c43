#![no_main]
#![no_std]

// sets default panic handler
#[allow(unused_imports)]
use panic_itm;

// provides _start symbol
use cortex_m_rt::{entry, exception};

use stm32f3xx_hal as stm32f303;

use stm32f303::{flash::FlashExt, gpio::GpioExt, pac, rcc::RccExt, time::U32Ext};

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};
use nanorand::{rand::pcg64::Pcg64 as Rng, RNG};

use dot8::{frame::WIDTH, Builder, Button, Context};
use peripherals::{freeze_clocks, logger::*, Buttons, ClocksExt, MatrixPins, Millis};

mod context;
use context::BoardContext;

const FPS: u8 = 30;
const PADDLE: [u8; 1] = [0b11];
const PADDLE_WIDTH: u8 = 2;
const PADDLE_ROW: i32 = 7;
/// A held button starts repeating after this long
const REPEAT_AFTER_MS: u32 = 300;
const REPEAT_EVERY_FRAMES: u32 = 3;
const FALL_EVERY_FRAMES: u32 = 10;

#[exception]
fn SysTick() {
    peripherals::clock::tick();
}

#[entry]
fn main() -> ! {
    let cp = cortex_m::Peripherals::take().expect("Failed requesting peripherals");
    let dp = pac::Peripherals::take().expect("Failed requesting peripherals");

    #[cfg(not(feature = "semihosting"))]
    let logger = create_itm_logger::<InterruptFree>(LevelFilter::Info, cp.ITM);
    #[cfg(feature = "semihosting")]
    let logger = create_semihosting_logger::<InterruptFree>(LevelFilter::Info)
        .expect("Failed requesting semihosting stdout");
    unsafe { init(&logger) }
    info!("init process started");

    info!("configuring clocks");
    let mut flash = dp.FLASH.constrain();
    let mut rcc = dp.RCC.constrain();
    let clocks = freeze_clocks(36.mhz(), rcc.cfgr, &mut flash).set_tpiu_async_cpr(2.mhz());
    let clock = Millis::start(cp.SYST, clocks);

    info!("configuring matrix on pb12 (cs), pb13 (clk), pb15 (din)");
    let mut gpiob = dp.GPIOB.split(&mut rcc.ahb);
    let cs = gpiob
        .pb12
        .into_push_pull_output(&mut gpiob.moder, &mut gpiob.otyper);
    let clk = gpiob
        .pb13
        .into_push_pull_output(&mut gpiob.moder, &mut gpiob.otyper);
    let din = gpiob
        .pb15
        .into_push_pull_output(&mut gpiob.moder, &mut gpiob.otyper);

    info!("configuring buttons on pa1 (left), pa2 (right)");
    let mut gpioa = dp.GPIOA.split(&mut rcc.ahb);
    let left = gpioa
        .pa1
        .into_pull_up_input(&mut gpioa.moder, &mut gpioa.pupdr);
    let right = gpioa
        .pa2
        .into_pull_up_input(&mut gpioa.moder, &mut gpioa.pupdr);

    let ctx = BoardContext {
        pins: MatrixPins::new(din, clk, cs),
        buttons: Buttons::new(left, right),
        clock,
    };
    let mut dot = Builder::new()
        .with_context(ctx)
        .with_fps(FPS)
        .build()
        .expect("Failed building platform");
    dot.begin();

    let mut rng = Rng::new_seed(dot.ctx_mut().millis() as u128 | 0xD07);
    let max_x = (WIDTH - PADDLE_WIDTH as usize) as i32;
    let mut paddle_x = max_x / 2;
    let mut drop = (rng.generate::<u8>() as usize % WIDTH, 0usize);
    let mut brightness = dot.display().brightness();
    let mut streak = 0u32;

    info!("game loop at {}fps", FPS);
    loop {
        dot.update();

        let frames = dot.frame_count();
        let (go_left, go_right, cycle_brightness) = {
            let input = dot.input();
            let repeat = |button| {
                input.held(button)
                    && input.hold_time(button) > REPEAT_AFTER_MS
                    && frames % REPEAT_EVERY_FRAMES == 0
            };
            (
                input.pressed(Button::Left) || repeat(Button::Left),
                input.pressed(Button::Right) || repeat(Button::Right),
                input.pressed(Button::Chord),
            )
        };

        if go_left {
            paddle_x = (paddle_x - 1).max(0);
        }
        if go_right {
            paddle_x = (paddle_x + 1).min(max_x);
        }
        if cycle_brightness {
            brightness = (brightness + 4) % 16;
            dot.set_brightness(brightness);
        }

        if frames % FALL_EVERY_FRAMES == 0 {
            drop.1 += 1;
        }
        if drop.1 as i32 == PADDLE_ROW {
            let x = drop.0 as i32;
            if (paddle_x..paddle_x + PADDLE_WIDTH as i32).contains(&x) {
                streak += 1;
                info!("caught, streak: {}", streak);
            } else {
                debug!("missed at column {}", x);
                streak = 0;
            }
            drop = (rng.generate::<u8>() as usize % WIDTH, 0);
        }

        let frame = dot.frame_mut();
        frame.clear();
        frame.draw_sprite(paddle_x, PADDLE_ROW, &PADDLE, PADDLE_WIDTH, 1);
        frame.set_pixel(drop.0, drop.1, true);
        dot.show();
        dot.wait_next_frame();
    }
}
