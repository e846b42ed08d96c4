mod boot;
mod config;
mod overlay;
mod page_app;
mod viewport;

fn main() {
    page_app::run();
}
