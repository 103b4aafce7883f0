//! Write the 8-bit sRGB gamma table as hexadecimal text.

use clap::Parser;
use log::LevelFilter;
use srgb_gamma_table::Opt;

fn run(opt: &Opt) -> anyhow::Result<()> {
    srgb_gamma_table::run(opt)?;
    if opt.check {
        println!("{} matches the sRGB gamma table", opt.output.display());
    } else {
        println!("sRGB gamma table written to {}", opt.output.display());
    }
    Ok(())
}

fn main() {
    simple_logger::SimpleLogger::new()
        .without_timestamps()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .unwrap();

    #[cfg(feature = "profile-with-puffin")]
    let frame_view = {
        puffin::set_scopes_on(true);
        puffin::GlobalFrameView::default()
    };

    let opt = Opt::parse();
    let code = match run(&opt) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("An error occured: {e}");
            e.chain().skip(1).for_each(|x| eprintln!("  {x}"));
            1
        }
    };

    #[cfg(feature = "profile-with-puffin")]
    {
        profiling::finish_frame!();
        let dump = std::fs::File::create("srgb-gamma-table.puffin")
            .map_err(anyhow::Error::from)
            .and_then(|mut file| frame_view.lock().write(&mut file));
        if let Err(e) = dump {
            log::warn!("Could not write puffin profile: {e:#}");
        }
    }

    std::process::exit(code);
}
