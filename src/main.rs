//! The range-strip command-line executable.

fn main() -> anyhow::Result<()> {
    range_strip::run()
}
