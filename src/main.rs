mod app;
mod app_main;
mod modules;

fn main() {
    app_main::main();
}
