/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

use yew::prelude::*;
use yew_router::prelude::Link;

use crate::catalog_data::catalog;
use crate::components::accordion::{Accordion, AccordionEntry};
use crate::components::hero_slider::{HeroSlide, HeroSlider};
use crate::components::product_card::ProductCard;
use crate::components::reveal::Reveal;
use crate::components::testimonials::{Testimonial, Testimonials};
use crate::constants::{hero_interval_ms, testimonial_interval_ms};
use crate::routing::Route;

const FEATURED_COUNT: usize = 3;

fn hero_slides() -> Vec<HeroSlide> {
    [
        ("تشكيلة الموسم الجديد", "اكتشف أحدث المنتجات بأسعار مميزة", "/assets/images/hero-1.jpg"),
        ("خصم حتى ٣٠٪", "على الإلكترونيات والإكسسوارات لفترة محدودة", "/assets/images/hero-2.jpg"),
        ("شحن مجاني", "لجميع الطلبات داخل المملكة", "/assets/images/hero-3.jpg"),
    ]
    .into_iter()
    .map(|(title, subtitle, image)| HeroSlide {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        image: image.to_string(),
        cta_label: "تسوق الآن".to_string(),
        cta_href: "/products".to_string(),
    })
    .collect()
}

fn faq_entries() -> Vec<AccordionEntry> {
    [
        ("كم يستغرق التوصيل؟", "يصل طلبك خلال ٢ إلى ٥ أيام عمل حسب مدينتك."),
        ("هل يمكنني إرجاع المنتج؟", "نعم، خلال ١٤ يوماً من الاستلام بشرط أن يكون بحالته الأصلية."),
        ("ما طرق الدفع المتاحة؟", "البطاقات الائتمانية، مدى، والدفع عند الاستلام."),
    ]
    .into_iter()
    .map(|(title, body)| AccordionEntry {
        title: title.to_string(),
        body: body.to_string(),
    })
    .collect()
}

fn testimonials() -> Vec<Testimonial> {
    [
        ("خدمة ممتازة وتوصيل سريع، أنصح بالتعامل معهم.", "سارة", "عميلة", 5),
        ("جودة المنتجات فاقت توقعاتي.", "محمد", "عميل", 5),
        ("تجربة تسوق سهلة وأسعار مناسبة.", "نورة", "عميلة", 4),
    ]
    .into_iter()
    .map(|(quote, author, role, rating)| Testimonial {
        quote: quote.to_string(),
        author: author.to_string(),
        role: role.to_string(),
        rating,
    })
    .collect()
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let featured: Vec<_> = catalog().iter().take(FEATURED_COUNT).cloned().collect();

    html! {
        <main class="home">
            <HeroSlider slides={hero_slides()} interval_ms={hero_interval_ms()} />

            <Reveal class="section featured-products">
                <div class="container">
                    <h2 class="section-title">{ "منتجات مميزة" }</h2>
                    <div class="products-grid">
                        { for featured.into_iter().map(|product| html! {
                            <ProductCard key={product.id.clone()} product={product.clone()} />
                        }) }
                    </div>
                    <Link<Route> to={Route::Products} classes="btn btn-outline">{ "عرض كل المنتجات" }</Link<Route>>
                </div>
            </Reveal>

            <Reveal class="section faq" animation="fade-left">
                <div class="container">
                    <h2 class="section-title">{ "الأسئلة الشائعة" }</h2>
                    <Accordion entries={faq_entries()} />
                </div>
            </Reveal>

            <Reveal id="testimonials" class="section testimonials">
                <div class="container">
                    <h2 class="section-title">{ "آراء العملاء" }</h2>
                    <Testimonials items={testimonials()} interval_ms={testimonial_interval_ms()} />
                </div>
            </Reveal>
        </main>
    }
}
