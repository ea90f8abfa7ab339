//! Face task
//!
//! Owns the watch face and the display. Waits on the clock signal, the
//! frame ticker (only while animations run) and the VCOM ticker, then
//! repaints whatever the face reports dirty.

use core::future::pending;

use defmt::*;
use embassy_futures::select::{select3, Either3};
use embassy_time::{Duration, Instant, Ticker};

use nat24_core::config::WatchConfig;
use nat24_core::watch::{FaceEvent, WatchFace};
use nat24_display::{draw_label, GraphicsCanvas, MonoPalette};

use crate::channels::TIME_SIGNAL;
use crate::display::{Display, HEIGHT, WIDTH};

/// Face task - event loop and rendering
#[embassy_executor::task]
pub async fn face_task(mut display: Display, config: WatchConfig) {
    info!("Face task started");

    if let Err(e) = display.clear_all().await {
        error!("Display clear failed: {:?}", Debug2Format(&e));
    }

    // The clock task publishes immediately after boot
    let now = TIME_SIGNAL.wait().await;
    let mut face = WatchFace::new(WIDTH as u32, HEIGHT as u32, config.face, now);

    let start = Instant::now();
    match face.start_entrance(0) {
        Ok(()) if face.needs_frames() => info!("Entrance started"),
        Ok(()) => info!("Entrance disabled, face settled"),
        Err(e) => warn!("Entrance not scheduled: {:?}", e),
    }

    let mut frame_ticker =
        Ticker::every(Duration::from_millis(config.display.frame_interval_ms as u64));
    let mut vcom_ticker =
        Ticker::every(Duration::from_millis(config.display.vcom_interval_ms as u64));

    paint(&mut face, &mut display).await;

    loop {
        let animating = face.needs_frames();

        match select3(
            TIME_SIGNAL.wait(),
            async {
                if animating {
                    frame_ticker.next().await
                } else {
                    pending::<()>().await
                }
            },
            vcom_ticker.next(),
        )
        .await
        {
            Either3::First(time) => {
                debug!("Time {:02}:{:02}", time.hour, time.minute);
                face.handle(FaceEvent::Tick(time));
            }

            Either3::Second(()) => {
                let now_ms = start.elapsed().as_millis();
                face.handle(FaceEvent::Frame(now_ms));
                if !face.needs_frames() {
                    info!("Entrance finished");
                }
            }

            Either3::Third(()) => {
                if let Err(e) = display.toggle_vcom().await {
                    warn!("VCOM toggle failed: {:?}", Debug2Format(&e));
                }
                continue;
            }
        }

        paint(&mut face, &mut display).await;
    }
}

/// Render dirty layers into the frame buffer and push changed lines
async fn paint(face: &mut WatchFace, display: &mut Display) {
    let layout = *face.layout();

    let painted = {
        let mut canvas = GraphicsCanvas::with_bounds(&mut *display, MonoPalette, layout.face);
        face.render(&mut canvas)
            .unwrap_or_else(|never| match never {})
    };
    if !painted.any() {
        return;
    }

    if painted.label {
        draw_label(&mut *display, &MonoPalette, layout.label, face.label())
            .unwrap_or_else(|never| match never {});
    }

    match display.flush().await {
        Ok(lines) => trace!("Flushed {} lines", lines),
        Err(e) => warn!("Display flush failed: {:?}", Debug2Format(&e)),
    }
}
