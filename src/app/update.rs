// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The gallery controller decides state; this module turns its effects into
//! Iced tasks (category fetches, image downloads) and feeds their results
//! back as messages.

use super::Message;
use crate::application::port::{FetchError, ItemFetcher};
use crate::domain::gallery::GalleryItem;
use crate::gallery::{self, Effect, GalleryController, LoadTicket};
use crate::media::remote_image::{ImageDownloader, RemoteImageCache};
use iced::Task;
use std::sync::Arc;

/// Mutable application state borrowed for one update.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut GalleryController,
    pub fetcher: Option<&'a Arc<dyn ItemFetcher>>,
    pub images: &'a mut RemoteImageCache,
    pub downloader: Option<&'a ImageDownloader>,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Gallery(message) => handle_gallery_message(ctx, message),
        Message::ImageFetched { url, result } => {
            ctx.images.complete(url, result);
            Task::none()
        }
    }
}

fn handle_gallery_message(ctx: &mut UpdateContext<'_>, message: gallery::Message) -> Task<Message> {
    let fetch = match ctx.gallery.handle(message) {
        Effect::None => Task::none(),
        Effect::Fetch(ticket) => fetch_task(ctx.fetcher, ticket),
    };
    Task::batch([fetch, request_visible_images(ctx)])
}

/// Starts the fetch for `ticket`; the result comes back tagged with it.
fn fetch_task(fetcher: Option<&Arc<dyn ItemFetcher>>, ticket: LoadTicket) -> Task<Message> {
    let Some(fetcher) = fetcher else {
        return Task::done(loaded(
            ticket,
            Err(FetchError::new("no HTTP client available")),
        ));
    };
    Task::perform(fetcher.fetch_items(ticket.category()), move |result| {
        loaded(ticket, result)
    })
}

fn loaded(ticket: LoadTicket, result: Result<Vec<GalleryItem>, FetchError>) -> Message {
    Message::Gallery(gallery::Message::ItemsLoaded { ticket, result })
}

/// Downloads images for the current page and the lightbox item that are not
/// cached yet.
fn request_visible_images(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let urls: Vec<String> = ctx
        .gallery
        .page_slice()
        .iter()
        .chain(ctx.gallery.lightbox_item())
        .map(|item| item.image_url.clone())
        .filter(|url| !url.is_empty())
        .collect();

    let mut tasks = Vec::new();
    for url in urls {
        if !ctx.images.request(&url) {
            continue;
        }
        match ctx.downloader {
            Some(downloader) => {
                let downloader = downloader.clone();
                let target = url.clone();
                tasks.push(Task::perform(downloader.download(target), move |result| {
                    Message::ImageFetched { url, result }
                }));
            }
            None => ctx
                .images
                .complete(url, Err("no HTTP client available".to_string())),
        }
    }
    Task::batch(tasks)
}
