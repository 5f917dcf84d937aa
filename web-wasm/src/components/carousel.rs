//! 活動カルーセルコンポーネント
//!
//! スライド（外側）と画像（内側）の2段ナビゲーション。状態遷移は
//! `las_portal_common::Carousel` に任せ、ここでは描画とクリック処理のみ行う。

use leptos::prelude::*;
use las_portal_common::Carousel;
use super::fallback_image::FallbackImage;

#[component]
pub fn ActivityCarousel(carousel: Carousel) -> impl IntoView {
    let slide_count = carousel.slide_count();
    let state = RwSignal::new(carousel);

    let slide = Memo::new(move |_| state.with(|c| c.current_slide().clone()));
    let image_src = Signal::derive(move || state.with(|c| c.current_image().to_string()));
    let fallback = Signal::derive(move || slide.with(|s| s.fallback_url.clone()));
    let alt = Signal::derive(move || {
        let image = state.with(Carousel::image_index);
        slide.with(|s| format!("{} - Image {}", s.title, image + 1))
    });
    let has_controls = move || slide.with(|s| s.has_gallery_controls());

    let jump_to_slide = move |idx: usize| {
        state.update(|c| {
            if let Err(e) = c.jump_to_slide(idx) {
                gloo::console::warn!(e.to_string());
            }
        });
    };
    let jump_to_image = move |idx: usize| {
        state.update(|c| {
            if let Err(e) = c.jump_to_image(idx) {
                gloo::console::warn!(e.to_string());
            }
        });
    };

    let slide_dots = (0..slide_count)
        .map(|idx| {
            view! {
                <button
                    class=move || slide_dot_class(state.with(Carousel::slide_index) == idx)
                    aria-label=format!("Go to slide {}", idx + 1)
                    on:click=move |_| jump_to_slide(idx)
                />
            }
        })
        .collect_view();

    view! {
        <div class="carousel">
            <button
                class="carousel-nav carousel-prev"
                aria-label="Previous slide"
                on:click=move |_| state.update(Carousel::prev_slide)
            >
                "‹"
            </button>
            <button
                class="carousel-nav carousel-next"
                aria-label="Next slide"
                on:click=move |_| state.update(Carousel::next_slide)
            >
                "›"
            </button>

            <div class="carousel-card">
                <div class="carousel-gallery">
                    <FallbackImage src=image_src fallback=fallback alt=alt class="carousel-image" />

                    <Show when=has_controls>
                        <button
                            class="gallery-nav gallery-prev"
                            aria-label="Previous image"
                            on:click=move |_| state.update(Carousel::prev_image)
                        >
                            "‹"
                        </button>
                        <button
                            class="gallery-nav gallery-next"
                            aria-label="Next image"
                            on:click=move |_| state.update(Carousel::next_image)
                        >
                            "›"
                        </button>
                        <div class="gallery-dots">
                            {move || {
                                let (count, current) =
                                    state.with(|c| (c.image_count(), c.image_index()));
                                (0..count)
                                    .map(|idx| view! {
                                        <button
                                            class=image_dot_class(idx == current)
                                            aria-label=format!("Go to image {}", idx + 1)
                                            on:click=move |_| jump_to_image(idx)
                                        />
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </div>

                <div class="carousel-content">
                    <div>
                        <span class="badge">{move || slide.with(|s| s.date.clone())}</span>
                        <h3>{move || slide.with(|s| s.title.clone())}</h3>
                        <p class="carousel-description">
                            {move || slide.with(|s| s.description.clone())}
                        </p>
                    </div>
                    <div class="slide-dots">{slide_dots}</div>
                </div>
            </div>
        </div>
    }
}

fn slide_dot_class(active: bool) -> &'static str {
    if active { "slide-dot active" } else { "slide-dot" }
}

fn image_dot_class(active: bool) -> &'static str {
    if active { "gallery-dot active" } else { "gallery-dot" }
}
