use leptos::prelude::*;
use task_board_ui::app::App;
use task_board_ui::config::AppConfig;
use task_board_ui::logging;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    logging::init(&config.log_filter);
    tracing::info!("mounting task board");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
