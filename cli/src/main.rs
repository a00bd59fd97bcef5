use clap::Clap;
use env_logger::Env;
use flume;
use gui::core::gui::TrackMapPlot;
use log::info;
use std::thread;
use trackmap::core::handle_feed::handle_feed;
use trackmap::pre::check_map_opts_pars::check_map_opts_pars;
use trackmap::pre::map_opts::MapOpts;
use trackmap::pre::read_map_pars::read_map_pars;
use trackmap::pre::theme::Theme;

fn main() -> anyhow::Result<()> {
    // PRE-PROCESSING ------------------------------------------------------------------------------
    // get map options from the command line arguments and initialize logging (debug flag raises
    // the default filter level)
    let map_opts: MapOpts = MapOpts::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(if map_opts.debug {
        "debug"
    } else {
        "info"
    }))
    .init();

    // read map parameters
    let map_pars = read_map_pars(map_opts.parfile_path.as_path())?;

    // check map options and parameters
    check_map_opts_pars(&map_opts, &map_pars)?;

    // print feed details
    info!(
        "Rendering live track positions for {} with source {}",
        map_pars.feed_pars.track_name, map_pars.feed_pars.source
    );

    // EXECUTION -----------------------------------------------------------------------------------
    if !map_opts.gui {
        // HEADLESS CASE ---------------------------------------------------------------------------
        let feed_report = handle_feed(
            &map_pars,
            map_opts.surface_width,
            map_opts.surface_height,
            map_opts.tick_limit,
            map_opts.debug,
            None,
            1.0,
        )?;

        // POST-PROCESSING -------------------------------------------------------------------------
        // print results
        feed_report.print_mode_summary();
    } else {
        // GUI CASE --------------------------------------------------------------------------------
        // create channel for communication between GUI and feed
        let (tx, rx) = flume::unbounded();

        // create a separate thread for the feed (executed in real-time) -> map_opts and map_pars
        // get moved and must therefore be copied to be still available afterwards
        let map_opts_thread = map_opts.clone();
        let map_pars_thread = map_pars.clone();

        let _ = thread::spawn(move || {
            handle_feed(
                &map_pars_thread,
                map_opts_thread.surface_width,
                map_opts_thread.surface_height,
                0, // the GUI feed runs until the source is exhausted
                map_opts_thread.debug,
                Some(&tx),
                map_opts_thread.realtime_factor,
            )
        });

        // start GUI (must be done in the main thread)
        let theme = Theme::from_pars(&map_pars.theme_pars)?;
        let gui = TrackMapPlot::new(rx, theme);
        let native_options = eframe::NativeOptions::default();
        eframe::run_native(Box::new(gui), native_options);
    }

    Ok(())
}
