//! Renders a bordered table and a service tree to stdout.

use blockprint::shape::build;
use blockprint::{GridStyle, render_to_string};

fn main() -> blockprint::Result<()> {
    let table = build::grid_text(
        GridStyle::Bars,
        vec![
            vec!["region", "uptime"],
            vec!["east", "99.99%"],
            vec!["west", "99.95%"],
        ],
    )?;
    println!("{}", render_to_string(&build::frame(build::pad(table))));

    let services = build::tree1(
        build::line("services"),
        vec![
            build::line("gateway"),
            build::tree1(
                build::line("storage"),
                vec![build::line("wal"), build::line("index")],
            )?,
        ],
    )?;
    println!();
    println!("{}", render_to_string(&services));

    Ok(())
}
