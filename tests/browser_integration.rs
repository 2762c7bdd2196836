use champion_builds::{BrowserSession, LaunchOptions, Scraper, SiteConfig};
use std::time::Duration;

fn launch() -> BrowserSession {
    BrowserSession::launch(LaunchOptions::new().headless(true).render_wait(Duration::from_millis(200)))
        .expect("Failed to launch browser")
}

fn data_url(html: &str) -> String {
    format!("data:text/html,{}", urlencoding::encode(html))
}

#[test]
#[ignore] // Requires Chrome to be installed
fn test_fetch_rendered_html() {
    let session = launch();

    let html = session
        .fetch_html(&data_url("<html><body><p id='static'>static</p></body></html>"))
        .expect("Failed to fetch");

    assert!(html.contains("id=\"static\""));
}

#[test]
#[ignore]
fn test_fetch_sees_script_output() {
    let session = launch();

    let page = "<html><body><div id='root'></div><script>\
                document.getElementById('root').innerHTML = '<table class=\"data_table\"></table>';\
                </script></body></html>";
    let html = session.fetch_html_when(&data_url(page), "table.data_table").expect("Failed to fetch");

    assert!(html.contains("data_table"));
}

#[test]
#[ignore]
fn test_scrape_live_roster() {
    let session = launch();
    let scraper = Scraper::new(&session, SiteConfig::default());

    let roster = scraper.roster().expect("Failed to scrape roster");

    println!("Champions: {} (skipped {})", roster.len(), roster.skipped);
    assert!(!roster.is_empty());
}
