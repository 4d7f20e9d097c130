use anyhow::Result;
use axum::http::{StatusCode, header};
use tarrytown_model::routes::pages;

mod common;
use common::build_test_app_with;

#[tokio::test]
async fn index_redirects_to_first_category() -> Result<()> {
    let app = common::build_test_app().await?;

    let response = app.server.get(pages::INDEX).await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/browse/tapes"
    );
    Ok(())
}

#[tokio::test]
async fn browse_renders_cards_with_metadata() -> Result<()> {
    let app = build_test_app_with(|config| {
        let data = &config.archive.data_dir;
        std::fs::write(
            data.join("site.json"),
            r#"{"title":"Family Tapes","intro":"Digitised VHS & 8mm"}"#,
        )
        .unwrap();
        std::fs::write(
            data.join("tapes.json"),
            r#"{"A.mp4":{"title":"Beach <1986>","description":"Cape May"}}"#,
        )
        .unwrap();
    })
    .await?;

    let response = app.server.get(&pages::browse("tapes")).await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<title>Family Tapes</title>"));
    assert!(html.contains("Digitised VHS &amp; 8mm"));
    assert!(html.contains("Beach &lt;1986&gt;"));
    assert!(html.contains("Cape May"));
    assert!(html.contains(r#"<h5 class="card-title">file10.mp4</h5>"#));
    assert!(html.contains(r#"src="/videos/tapes/file2.mp4" type="video/mp4""#));
    assert!(!html.contains("notes.txt"));

    let first = html.find("Beach").unwrap();
    let second = html.find("file2.mp4").unwrap();
    let third = html.find("file10.mp4").unwrap();
    assert!(first < second && second < third);
    Ok(())
}

#[tokio::test]
async fn browse_without_metadata_falls_back_to_names() -> Result<()> {
    let app = build_test_app_with(|config| {
        std::fs::write(config.archive.data_dir.join("tapes.json"), "{oops")
            .unwrap();
    })
    .await?;

    let response = app.server.get(&pages::browse("tapes")).await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<title>tapes</title>"));
    assert!(html.contains(r#"<h5 class="card-title">A.mp4</h5>"#));
    Ok(())
}

#[tokio::test]
async fn empty_category_shows_placeholder() -> Result<()> {
    let app = common::build_test_app().await?;

    let response = app.server.get(&pages::browse("clips")).await;

    response.assert_status_ok();
    assert!(
        response
            .text()
            .contains("No videos found in <code>/videos/clips/</code>")
    );
    Ok(())
}

#[tokio::test]
async fn unknown_category_shows_error_alert() -> Result<()> {
    let app = common::build_test_app().await?;

    let response = app.server.get(&pages::browse("secret")).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains("Could not load video list."));
    Ok(())
}

#[tokio::test]
async fn navbar_fragment_is_included() -> Result<()> {
    let app = build_test_app_with(|config| {
        let navbar = config.archive.data_dir.join("navbar.html");
        std::fs::write(&navbar, r#"<nav id="site-nav">Home</nav>"#).unwrap();
        config.archive.navbar_path = Some(navbar);
    })
    .await?;

    let response = app.server.get(&pages::browse("tapes")).await;

    response.assert_status_ok();
    assert!(response.text().contains(r#"<nav id="site-nav">Home</nav>"#));
    Ok(())
}
