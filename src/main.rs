// src/main.rs

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod ui;

use directories::ProjectDirs;
use informe_tecnico_lib::context::{AppCtx, APP_ID, APP_ORG, APP_QUALIFIER};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

fn main() -> eframe::Result<()> {
    let app_data_dir: PathBuf = if let Ok(p) = env::var("INFORME_DATA_DIR") {
        PathBuf::from(p)
    } else {
        let proj = ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_ID)
            .expect("could not determine app data dir");
        proj.data_dir().to_path_buf()
    };

    std::fs::create_dir_all(&app_data_dir).expect("could not create app data dir");

    let state = informe_tecnico_lib::init_state(&app_data_dir).expect("failed to init app state");
    let state = Arc::new(state);

    let ctx = Arc::new(AppCtx::new(app_data_dir));

    eframe::run_native(
        "Informe Técnico",
        eframe::NativeOptions::default(),
        Box::new(move |_cc| Ok(Box::new(ui::UiApp::new(state.clone(), ctx.clone())))),
    )
}
