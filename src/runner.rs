// src/runner.rs
// One plugin run: fetch → extract → aggregate → diff/notify → render.

use std::error::Error;

use crate::{
    config::consts::{BAD_SESSION_TEXT, NO_SESSION_TEXT, PLATFORM_TEXT, UNSUPPORTED_TEXT},
    config::options::{PluginOptions, Variant},
    core::{HttpFetcher, IconPainter, Notifier, PageFetcher, Platform, PlatformNotifier, TemplatePainter},
    core::net::session_cookie,
    parcel::ParcelItem,
    render, scrape,
    store::{self, CacheStore, JsonFileStore},
    tracker,
};

/// Change tracking collaborators; present only for the notification variant.
pub struct Tracking<'a> {
    pub store: &'a dyn CacheStore,
    pub notifier: &'a dyn Notifier,
}

/// Everything the pipeline talks to outside itself.
pub struct Collaborators<'a> {
    pub fetcher: &'a dyn PageFetcher,
    pub painter: &'a dyn IconPainter,
    pub tracking: Option<Tracking<'a>>,
}

/// What a run produced.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Text for the menu-bar host.
    pub output: String,
    pub parcels: Vec<ParcelItem>,
    /// Ids that triggered a notification.
    pub changed: Vec<String>,
    /// Pages counted as empty because they could not be fetched or parsed.
    pub failed_pages: usize,
}

/// Run the pipeline with real collaborators built from `options` on the current OS.
pub fn run(options: &PluginOptions) -> Result<RunReport, Box<dyn Error>> {
    run_on(options, std::env::consts::OS)
}

/// Same as [`run`], for the OS named `os` (as in `std::env::consts::OS`).
/// Unsupported platform, missing session and unusable session render as fatal states, not errors.
pub fn run_on(options: &PluginOptions, os: &str) -> Result<RunReport, Box<dyn Error>> {
    let painter = TemplatePainter::new()?;

    let platform = Platform::from_os(os);
    if options.variant == Variant::Notify && platform.is_none() {
        loge!("Unsupported platform: {os}");
        return fatal(&painter, &format!("{PLATFORM_TEXT} {os} {UNSUPPORTED_TEXT}"), options);
    }

    let session_file = options.session_file.display();
    let Some(session_id) = store::load_session(&options.session_file)? else {
        loge!("No session id in {session_file}");
        return fatal(&painter, &format!("{NO_SESSION_TEXT} {session_file}"), options);
    };
    if let Err(e) = session_cookie(&session_id) {
        loge!("Session id in {session_file} is not a valid cookie: {e}");
        return fatal(&painter, &format!("{BAD_SESSION_TEXT} {session_file}"), options);
    }

    let fetcher = HttpFetcher::new(options, &session_id)?;
    let cache = JsonFileStore::new(&options.cache_file);
    let notifier = platform.map(PlatformNotifier::new);

    let tracking = match (options.variant, notifier.as_ref()) {
        (Variant::Notify, Some(notifier)) => Some(Tracking { store: &cache, notifier }),
        _ => None,
    };

    execute(
        options,
        Collaborators { fetcher: &fetcher, painter: &painter, tracking },
    )
}

/// The pipeline proper, with every outside dependency injected.
pub fn execute(options: &PluginOptions, with: Collaborators<'_>) -> Result<RunReport, Box<dyn Error>> {
    let collected = scrape::collect_parcels(with.fetcher);
    logf!(
        "Collected {} parcels ({} pages failed)",
        collected.parcels.len(),
        collected.failed_pages
    );

    let changed = match with.tracking {
        Some(Tracking { store, notifier }) => tracker::track(&collected.parcels, store, notifier)?.changed,
        None => Vec::new(),
    };

    let output = render::listing(&collected.parcels, with.painter, options)?;

    Ok(RunReport {
        output,
        parcels: collected.parcels,
        changed,
        failed_pages: collected.failed_pages,
    })
}

fn fatal(painter: &dyn IconPainter, message: &str, options: &PluginOptions) -> Result<RunReport, Box<dyn Error>> {
    Ok(RunReport {
        output: render::fatal(painter, message, options.theme)?,
        ..RunReport::default()
    })
}
