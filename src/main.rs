use promo_admin::config::Config;
use promo_admin::page::surface::{ConfirmDialog, Navigator};
use promo_admin::page::{PromotionsPage, UiEvent};
use promo_admin::view::{
    RowImage, TableBody, NO_IMAGE_TEXT, PLACEHOLDER_COLSPAN, PLACEHOLDER_TEXT,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Console stand-in for the page's modal widget. There is nothing to confirm
/// interactively here, so it only reports what the page asked for.
struct ConsoleDialog;

impl ConfirmDialog for ConsoleDialog {
    fn show(&self, promotion_name: &str) {
        println!("[dialog] delete \"{promotion_name}\"?");
    }

    fn hide(&self) {
        println!("[dialog] hidden");
    }
}

struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn goto(&self, path: &str) {
        println!("[navigate] {path}");
    }
}

/// Smoke driver: load the promotions list from a live backend and print the
/// rendered table. Everything interactive is covered by tests.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    info!(base_url = %config.api_base_url, "loading promotions");

    let mut page = PromotionsPage::new(&config, Box::new(ConsoleDialog), Box::new(ConsoleNavigator));
    page.handle(UiEvent::PageLoad).await;

    if let Some(banner) = page.notifier().current() {
        println!("[{:?}] {}", banner.severity, banner.message);
    }

    match page.table().body() {
        // One centered cell spanning the table's full width.
        TableBody::Placeholder => {
            println!("{PLACEHOLDER_TEXT:^width$}", width = PLACEHOLDER_COLSPAN * 14);
        }
        TableBody::Rows(rows) => {
            for row in rows {
                let image = match &row.image {
                    RowImage::Thumbnail(url) => url.as_str(),
                    RowImage::None => NO_IMAGE_TEXT,
                };
                println!(
                    "#{} | {} | {} | {} | {} | {} .. {} | {} | edit: {}",
                    row.id,
                    row.name,
                    row.description,
                    row.course_name,
                    row.price,
                    row.start_date,
                    row.end_date,
                    image,
                    row.edit_href,
                );
            }
        }
    }

    Ok(())
}
