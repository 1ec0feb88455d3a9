mod command;
mod screens;
mod view;

fn main() -> anyhow::Result<()> {
    command::run()
}
