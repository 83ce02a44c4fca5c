//! Property tests for the gallery's capacity, lifecycle and id rules.

use chrono::Utc;
use domain::{
    Artist, ArtistId, Artwork, ArtworkId, ArtworkState, ArtworkType, GALLERY_CAPACITY, Gallery,
    GalleryPolicy, Money, Transition,
};
use proptest::prelude::*;

const STATES: [ArtworkState; 4] = [
    ArtworkState::AwaitingGalleryEntry,
    ArtworkState::InGallery,
    ArtworkState::Sold,
    ArtworkState::ReturnedToArtist,
];

const TRANSITIONS: [Transition; 4] = [
    Transition::AddToGallery,
    Transition::Sell,
    Transition::ReturnToArtist,
    Transition::SendToWaitingList,
];

#[derive(Debug, Clone)]
enum Op {
    AddArtist,
    AddArtwork { artist: u64, work: u8, state: usize },
    ChangeState { artwork: u64, state: usize },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => Just(Op::AddArtist),
        6 => (0u64..16, 0u8..120, 0usize..4)
            .prop_map(|(artist, work, state)| Op::AddArtwork { artist, work, state }),
        3 => (0u64..120, 0usize..4).prop_map(|(artwork, state)| Op::ChangeState { artwork, state }),
    ]
}

fn run(gallery: &mut Gallery, op: &Op) {
    match *op {
        Op::AddArtist => {
            let name = format!("Artist {}", gallery.artist_count());
            gallery.add_artist(Artist::new(&name).unwrap());
        }
        Op::AddArtwork {
            artist,
            work,
            state,
        } => {
            let artwork = Artwork::new(
                &format!("Work {work}"),
                Money::from_pounds(100),
                Utc::now(),
                ArtworkType::Painting,
                STATES[state],
            )
            .unwrap();
            let _ = gallery.add_artwork(ArtistId::new(artist), artwork);
        }
        Op::ChangeState { artwork, state } => {
            let _ = gallery.change_artwork_state(ArtworkId::new(artwork), STATES[state], Utc::now());
        }
    }
}

fn seeded_gallery(artists: usize) -> Gallery {
    let mut gallery = Gallery::new();
    for i in 0..artists {
        gallery.add_artist(Artist::new(&format!("Seed {i}")).unwrap());
    }
    gallery
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    /// Property: display limits hold after any sequence of operations.
    #[test]
    fn display_limits_always_hold(ops in prop::collection::vec(op(), 0..300)) {
        let mut gallery = seeded_gallery(12);
        for op in &ops {
            run(&mut gallery, op);

            prop_assert!(gallery.artworks_in_gallery() <= GALLERY_CAPACITY);
            for (_, artist) in gallery.artists() {
                prop_assert!(artist.artworks_in_gallery_count() <= Artist::MAX_ARTWORKS_IN_GALLERY);
            }
        }
    }

    /// Property: artwork ids are issued in sequence from the counter, and a
    /// rejected add consumes no id.
    #[test]
    fn artwork_ids_are_sequential(ops in prop::collection::vec(op(), 0..200)) {
        let mut gallery = seeded_gallery(4);
        let mut last: Option<ArtworkId> = None;

        for op in &ops {
            let before = gallery.artwork_id_counter();
            let Op::AddArtwork { artist, work, state } = *op else {
                run(&mut gallery, op);
                continue;
            };
            let artwork = Artwork::new(
                &format!("Work {work}"),
                Money::from_pounds(100),
                Utc::now(),
                ArtworkType::Sculpture,
                STATES[state],
            )
            .unwrap();

            match gallery.add_artwork(ArtistId::new(artist), artwork) {
                Ok(id) => {
                    prop_assert_eq!(id, before);
                    prop_assert_eq!(gallery.artwork_id_counter(), before.next());
                    if let Some(previous) = last {
                        prop_assert!(id > previous);
                    }
                    last = Some(id);
                }
                Err(_) => prop_assert_eq!(gallery.artwork_id_counter(), before),
            }
        }
    }

    /// Property: a transition either follows the table or leaves the state
    /// unchanged.
    #[test]
    fn transitions_follow_table(
        initial in 0usize..4,
        steps in prop::collection::vec(0usize..4, 0..20),
    ) {
        let initial = STATES[initial];
        let mut artwork = Artwork::new(
            "Subject",
            Money::from_pounds(50),
            Utc::now(),
            ArtworkType::Painting,
            initial,
        )
        .unwrap();

        for step in steps {
            let transition = TRANSITIONS[step];
            let before = artwork.state();
            let result = match transition {
                Transition::AddToGallery => artwork.add_to_gallery(Utc::now()),
                Transition::Sell => artwork.sell(),
                Transition::ReturnToArtist => artwork.return_to_artist(),
                Transition::SendToWaitingList => artwork.send_to_waiting_list(),
            };

            if before.can(transition) {
                prop_assert!(result.is_ok());
                prop_assert_eq!(artwork.state(), transition.target());
            } else {
                prop_assert!(result.is_err());
                prop_assert_eq!(artwork.state(), before);
            }
        }
    }

    /// Property: saving and loading reproduces the gallery.
    #[test]
    fn document_round_trip(ops in prop::collection::vec(op(), 0..120)) {
        let mut gallery = seeded_gallery(6);
        for op in &ops {
            run(&mut gallery, op);
        }

        let restored = Gallery::from_document(gallery.to_document(), GalleryPolicy::default());
        prop_assert_eq!(restored.ok(), Some(gallery));
    }
}
