use std::time::Duration;

use log::error;
use macroquad::prelude::*;

use client::{
    animation::Animation,
    config::{Settings, ViewConfig},
    draw,
};
use common::{constants::BORDER_PIXELS, maze::MazeMaker};

fn window_conf() -> Conf {
    // Bad settings are reported from `main` once logging is up.
    let view = ViewConfig::from_env().unwrap_or_default();

    Conf {
        window_title: "Maze".to_owned(),
        window_width: (view.window_width + BORDER_PIXELS) as i32,
        window_height: (view.window_height + BORDER_PIXELS) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!("bad settings: {}", e);
            std::process::exit(1);
        }
    };

    let maker = match MazeMaker::new(settings.maze) {
        Ok(maker) => maker,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut animation = Animation::new(maker, &settings.view);

    // Keeps drawing after the maze is done, until the window is closed.
    loop {
        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            break;
        }

        if is_key_pressed(KeyCode::Space) || is_key_pressed(KeyCode::R) {
            animation.restart();
        }

        animation.update(Duration::from_secs_f32(get_frame_time()));
        draw::draw_snapshot(&animation.snapshot(), &settings.view);

        next_frame().await;
    }
}
