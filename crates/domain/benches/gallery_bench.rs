use chrono::Utc;
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{
    Artist, Artwork, ArtworkId, ArtworkState, ArtworkType, Customer, Gallery, GalleryPolicy,
    GalleryService, Money, Order,
};
use gallery_store::InMemoryGalleryStore;

/// Ten artists with five in-gallery and five waiting artworks each, and
/// twenty customers with one order apiece.
fn populated_gallery() -> Gallery {
    let mut gallery = Gallery::new();
    for a in 0..10 {
        let artist_id = gallery.add_artist(Artist::new(&format!("Artist {a}")).unwrap());
        for w in 0..10 {
            let state = if w < 5 {
                ArtworkState::InGallery
            } else {
                ArtworkState::AwaitingGalleryEntry
            };
            let artwork = Artwork::new(
                &format!("Artwork {a}-{w}"),
                Money::from_pounds(100 + w),
                Utc::now(),
                ArtworkType::Painting,
                state,
            )
            .unwrap();
            gallery.add_artwork(artist_id, artwork).unwrap();
        }
    }
    for c in 0..20 {
        let customer_id = gallery.add_customer(Customer::new(&format!("Customer {c}")).unwrap());
        gallery
            .add_order(customer_id, Order::new(ArtworkId::new(c), Utc::now()))
            .unwrap();
    }
    gallery
}

fn bench_add_artwork(c: &mut Criterion) {
    let gallery = populated_gallery();
    let artist_id = gallery.artists().next().unwrap().0;

    c.bench_function("gallery/add_artwork_duplicate_scan", |b| {
        b.iter_batched(
            || gallery.clone(),
            |mut gallery| {
                let artwork = Artwork::new(
                    "Fresh piece",
                    Money::from_pounds(250),
                    Utc::now(),
                    ArtworkType::Sculpture,
                    ArtworkState::AwaitingGalleryEntry,
                )
                .unwrap();
                gallery.add_artwork(artist_id, artwork).unwrap();
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_searches(c: &mut Criterion) {
    let gallery = populated_gallery();

    c.bench_function("gallery/find_artwork_by_id", |b| {
        b.iter(|| gallery.find_artwork(ArtworkId::new(95)).unwrap());
    });

    c.bench_function("gallery/find_artworks_by_description", |b| {
        b.iter(|| gallery.find_artworks_by_description("-7").unwrap());
    });

    c.bench_function("gallery/find_order_by_artwork_id", |b| {
        b.iter(|| gallery.find_order_by_artwork_id(ArtworkId::new(19)).unwrap());
    });

    c.bench_function("gallery/check_duplicate_customers", |b| {
        b.iter(|| gallery.check_duplicate_customers());
    });
}

fn bench_persistence(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let gallery = populated_gallery();
    let document = gallery.to_document();

    c.bench_function("gallery/to_document", |b| {
        b.iter(|| gallery.to_document());
    });

    c.bench_function("gallery/from_document", |b| {
        b.iter(|| Gallery::from_document(document.clone(), GalleryPolicy::default()).unwrap());
    });

    c.bench_function("gallery/service_save", |b| {
        let service = GalleryService::new(gallery.clone(), InMemoryGalleryStore::new());
        b.iter(|| {
            rt.block_on(async {
                service.save().await.unwrap();
            });
        });
    });
}

criterion_group!(benches, bench_add_artwork, bench_searches, bench_persistence);
criterion_main!(benches);
