// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the gallery controller, localization, the
//! item fetcher, and the remote image cache, and translates gallery effects
//! into Iced tasks.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use subscription::{lightbox_input, navigation_key};

use crate::application::port::ItemFetcher;
use crate::domain::gallery::{Category, RouteResolution};
use crate::gallery::{self, GalleryController, ScrollLock};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{AppwriteFetcher, AppwriteSettings};
use crate::media::remote_image::{ImageDownloader, RemoteImageCache};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: GalleryController,
    fetcher: Option<Arc<dyn ItemFetcher>>,
    images: RemoteImageCache,
    downloader: Option<ImageDownloader>,
    /// i18n key of a startup warning (e.g. unreadable settings file).
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("gallery", &self.gallery.snapshot())
            .field("has_fetcher", &self.fetcher.is_some())
            .field("cached_images", &self.images.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn build_fetcher(settings: AppwriteSettings) -> crate::error::Result<Arc<dyn ItemFetcher>> {
    Ok(Arc::new(AppwriteFetcher::new(settings)?))
}

/// Picks the startup category: the CLI route first, then the configured default.
fn startup_category(route: Option<&str>, config: &config::Config) -> Category {
    match route {
        Some(segment) => {
            let resolution = Category::resolve_route(Some(segment));
            if let RouteResolution::Redirected { requested, category } = &resolution {
                tracing::warn!(
                    requested = requested.as_deref().unwrap_or_default(),
                    redirect = %category,
                    "unknown category; redirecting"
                );
            }
            resolution.category()
        }
        None => config.default_category(),
    }
}

impl App {
    /// Loads settings, builds the fetcher and downloader, and starts loading
    /// the startup category.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let settings = config.appwrite_settings();
        if let Some(field) = settings.missing_field() {
            tracing::warn!(field, "Appwrite connection is not configured");
        }
        let fetcher = match build_fetcher(settings) {
            Ok(fetcher) => Some(fetcher),
            Err(err) => {
                tracing::error!(error = %err, "failed to build gallery fetcher");
                None
            }
        };
        let downloader = match ImageDownloader::new() {
            Ok(downloader) => Some(downloader),
            Err(err) => {
                tracing::error!(error = %err, "failed to build image downloader");
                None
            }
        };

        let images = RemoteImageCache::new(config.image_cache_entries());
        tracing::debug!(capacity = images.capacity(), "image cache ready");

        let mut app = Self::with_parts(i18n, fetcher, downloader, images);
        app.notice = config_warning;

        let category = startup_category(flags.category.as_deref(), &config);
        let task = app.update(Message::Gallery(gallery::Message::SelectCategory(category)));
        (app, task)
    }

    /// Assembles an app from prebuilt parts without loading anything.
    pub fn with_parts(
        i18n: I18n,
        fetcher: Option<Arc<dyn ItemFetcher>>,
        downloader: Option<ImageDownloader>,
        images: RemoteImageCache,
    ) -> Self {
        Self {
            i18n,
            gallery: GalleryController::new(ScrollLock::new()),
            fetcher,
            images,
            downloader,
            notice: None,
        }
    }

    #[must_use]
    pub fn gallery(&self) -> &GalleryController {
        &self.gallery
    }

    #[must_use]
    pub fn images(&self) -> &RemoteImageCache {
        &self.images
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.gallery.category() {
            Some(category) => format!("{} - {app_name}", self.i18n.tr(category.i18n_key())),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_lightbox_subscription(self.gallery.is_lightbox_open())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            fetcher: self.fetcher.as_ref(),
            images: &mut self.images,
            downloader: self.downloader.as_ref(),
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            images: &self.images,
            notice: self.notice.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::FetchError;
    use crate::domain::gallery::GalleryItem;
    use crate::gallery::{LightboxInput, LoadPhase, NavigationKey};
    use crate::media::remote_image::ImageState;
    use futures_util::future::{self, BoxFuture, FutureExt};

    struct NeverFetcher;

    impl ItemFetcher for NeverFetcher {
        fn fetch_items(
            &self,
            _category: Category,
        ) -> BoxFuture<'static, Result<Vec<GalleryItem>, FetchError>> {
            future::pending().boxed()
        }
    }

    fn test_app() -> App {
        App::with_parts(
            I18n::new(Some("en-US".to_string()), &config::Config::default()),
            Some(Arc::new(NeverFetcher)),
            None,
            RemoteImageCache::default(),
        )
    }

    fn items(count: usize) -> Vec<GalleryItem> {
        (0..count)
            .map(|i| {
                GalleryItem::new(
                    format!("doc-{i}"),
                    format!("Work {i}"),
                    format!("https://cdn.example.com/{i}.jpg"),
                    "branding",
                )
            })
            .collect()
    }

    /// Selects `category` and feeds back a successful load for its ticket.
    fn load(app: &mut App, category: Category, result: Result<Vec<GalleryItem>, FetchError>) {
        let _ = app.update(Message::Gallery(gallery::Message::SelectCategory(category)));
        let ticket = app.gallery.current_ticket().expect("ticket after select");
        let _ = app.update(Message::Gallery(gallery::Message::ItemsLoaded {
            ticket,
            result,
        }));
    }

    #[test]
    fn selecting_category_starts_loading() {
        let mut app = test_app();
        let _ = app.update(Message::Gallery(gallery::Message::SelectCategory(
            Category::LogoDesign,
        )));
        assert_eq!(app.gallery().category(), Some(Category::LogoDesign));
        assert!(app.gallery().is_loading());
    }

    #[test]
    fn loaded_page_requests_visible_images_once() {
        let mut app = test_app();
        load(&mut app, Category::Branding, Ok(items(20)));

        // One page of 12 requested; no downloader so each is marked failed.
        assert_eq!(app.images().len(), 12);
        assert!(matches!(
            app.images().state("https://cdn.example.com/0.jpg"),
            Some(ImageState::Failed)
        ));
        assert!(app.images().state("https://cdn.example.com/12.jpg").is_none());
        assert_eq!(app.images().stats().requests, 12);

        let _ = app.update(Message::Gallery(gallery::Message::Paginate(2)));
        assert_eq!(app.images().len(), 20);
        assert_eq!(app.images().stats().requests, 20);
    }

    #[test]
    fn image_fetched_stores_handle() {
        let mut app = test_app();
        let _ = app.update(Message::ImageFetched {
            url: "https://cdn.example.com/a.jpg".to_string(),
            result: Ok(vec![1, 2, 3]),
        });
        assert!(app.images().handle("https://cdn.example.com/a.jpg").is_some());
    }

    #[test]
    fn lightbox_keys_route_through_app() {
        let mut app = test_app();
        load(&mut app, Category::Branding, Ok(items(3)));

        let _ = app.update(Message::Gallery(gallery::Message::OpenLightbox(2)));
        assert!(app.gallery().scroll_lock().is_locked());

        let _ = app.update(Message::Gallery(gallery::Message::Input(LightboxInput::Key(
            NavigationKey::ArrowRight,
        ))));
        assert_eq!(app.gallery().lightbox_index(), Some(0));

        let _ = app.update(Message::Gallery(gallery::Message::Input(LightboxInput::Key(
            NavigationKey::Escape,
        ))));
        assert!(!app.gallery().is_lightbox_open());
        assert!(!app.gallery().scroll_lock().is_locked());
    }

    #[test]
    fn failed_load_shows_error_phase() {
        let mut app = test_app();
        load(
            &mut app,
            Category::PosterFlyers,
            Err(FetchError::new("HTTP status: 500 Internal Server Error")),
        );
        assert!(matches!(app.gallery().phase(), Some(LoadPhase::Failed(_))));
        assert!(app.images().is_empty());
    }

    #[test]
    fn missing_fetcher_still_produces_a_task() {
        let mut app = App::with_parts(I18n::default(), None, None, RemoteImageCache::default());
        let _ = app.update(Message::Gallery(gallery::Message::SelectCategory(
            Category::SocialMedia,
        )));
        assert!(app.gallery().is_loading());
    }

    #[test]
    fn title_includes_active_category() {
        let mut app = test_app();
        assert_eq!(app.title(), "Portfolio");
        let _ = app.update(Message::Gallery(gallery::Message::SelectCategory(
            Category::LogoDesign,
        )));
        assert_eq!(app.title(), "Logo Design - Portfolio");
    }

    #[test]
    fn network_clients_build_from_default_settings() {
        let settings = config::Config::default().appwrite_settings_with_env(|_| None);
        assert!(build_fetcher(settings).is_ok());
        assert!(ImageDownloader::new().is_ok());
    }

    #[test]
    fn startup_category_prefers_route_then_config() {
        let mut config = config::Config::default();
        config.gallery.default_category = Some("social-media".to_string());

        assert_eq!(
            startup_category(Some("logo-design"), &config),
            Category::LogoDesign
        );
        assert_eq!(startup_category(Some("weddings"), &config), Category::Branding);
        assert_eq!(startup_category(None, &config), Category::SocialMedia);
    }
}
