use log::debug;

use super::stage::{Stage, Target, TargetId};
use super::trigger::Viewport;
use crate::config::MotionConfig;

/// The page regions the orchestrator binds to. Any of them may be missing.
pub struct Scene<T> {
    pub navbar: Option<T>,
    pub hero: Option<T>,
    pub hero_lines: Vec<T>,
    pub features: Option<T>,
    pub feature_cards: Vec<T>,
    pub philosophy_lines: Vec<T>,
    pub protocol_cards: Vec<T>,
}

impl<T> Default for Scene<T> {
    fn default() -> Self {
        Self {
            navbar: None,
            hero: None,
            hero_lines: Vec::new(),
            features: None,
            feature_cards: Vec::new(),
            philosophy_lines: Vec::new(),
            protocol_cards: Vec::new(),
        }
    }
}

/// Builds a stage with every trigger the landing page uses, plays the hero
/// entrance, and evaluates the initial scroll position.
pub fn bind<T: Target>(scene: Scene<T>, config: MotionConfig, viewport: Viewport, now: f64) -> Stage<T> {
    let mut stage = Stage::new(config, viewport);

    let add_all = |stage: &mut Stage<T>, items: Vec<T>| -> Vec<TargetId> {
        items.into_iter().map(|t| stage.add_target(t)).collect()
    };

    let hero_lines = add_all(&mut stage, scene.hero_lines);
    stage.entrance(&hero_lines, now);

    let feature_cards = add_all(&mut stage, scene.feature_cards);
    if let Some(features) = scene.features {
        let features = stage.add_target(features);
        stage.reveal(features, feature_cards);
    }

    for line in add_all(&mut stage, scene.philosophy_lines) {
        stage.reveal(line, vec![line]);
    }

    let cards = add_all(&mut stage, scene.protocol_cards);
    stage.stack(&cards);

    if let (Some(hero), Some(navbar)) = (scene.hero, scene.navbar) {
        let hero = stage.add_target(hero);
        let navbar = stage.add_target(navbar);
        stage.toggle(hero, navbar);
    }

    debug!("Bound {} scroll triggers", stage.registration_count());
    stage.on_scroll(viewport, now);
    stage
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::stage::tests::{at_scroll, FakeTarget, VH};
    use crate::motion::toggle::NavState;

    struct Page {
        navbar: FakeTarget,
        hero_lines: Vec<FakeTarget>,
        feature_cards: Vec<FakeTarget>,
        philosophy: Vec<FakeTarget>,
        cards: Vec<FakeTarget>,
    }

    // Hero 0..900, features 1000..1600, philosophy lines at 1800/1900,
    // three full-height protocol cards from 2400.
    fn page() -> (Page, Scene<FakeTarget>) {
        let page = Page {
            navbar: FakeTarget::at(0.0, 64.0),
            hero_lines: (0..3).map(|i| FakeTarget::at(200.0 + 90.0 * i as f64, 80.0)).collect(),
            feature_cards: (0..4).map(|_| FakeTarget::at(1100.0, 400.0)).collect(),
            philosophy: vec![FakeTarget::at(1800.0, 60.0), FakeTarget::at(1900.0, 60.0)],
            cards: (0..3).map(|i| FakeTarget::at(2400.0 + VH * i as f64, VH)).collect(),
        };
        let scene = Scene {
            navbar: Some(page.navbar.clone()),
            hero: Some(FakeTarget::at(0.0, 900.0)),
            hero_lines: page.hero_lines.clone(),
            features: Some(FakeTarget::at(1000.0, 600.0)),
            feature_cards: page.feature_cards.clone(),
            philosophy_lines: page.philosophy.clone(),
            protocol_cards: page.cards.clone(),
        };
        (page, scene)
    }

    fn opacity(target: &FakeTarget) -> Option<f64> {
        target.last().and_then(|p| p.opacity)
    }

    #[test]
    fn binds_every_region() {
        let (_, scene) = page();
        let stage = bind(scene, MotionConfig::default(), at_scroll(0.0), 0.0);
        // features + 2 philosophy lines + 3 cards + navbar
        assert_eq!(stage.registration_count(), 7);
        assert_eq!(stage.nav_state(), Some(NavState::Transparent));
    }

    #[test]
    fn hero_lines_enter_on_mount_and_refire_on_remount() {
        for _mount in 0..2 {
            let (page, scene) = page();
            let mut stage = bind(scene, MotionConfig::default(), at_scroll(0.0), 0.0);
            assert!(page.hero_lines.iter().all(|l| opacity(l) == Some(0.0)));
            while stage.on_frame(30.0) {}
            assert!(page.hero_lines.iter().all(|l| opacity(l) == Some(1.0)));
            stage.release();
        }
    }

    #[test]
    fn navbar_morphs_at_end_of_hero_and_then_stays() {
        let (page, scene) = page();
        let mut stage = bind(scene, MotionConfig::default(), at_scroll(0.0), 0.0);
        while stage.on_frame(30.0) {}

        let mut t = 30.0;
        for y in (0..=900).step_by(50) {
            stage.on_scroll(at_scroll(y as f64), t);
            let expected = if y >= 900 { NavState::Morphed } else { NavState::Transparent };
            assert_eq!(stage.nav_state(), Some(expected), "at {y}");
            t += 0.01;
        }
        while stage.on_frame(60.0) {}
        let morphed = page.navbar.last().unwrap();
        assert_eq!(morphed.backdrop_blur, Some(14.0));

        let settled = page.navbar.mutations();
        for y in (950..3000).step_by(50) {
            stage.on_scroll(at_scroll(y as f64), 61.0);
        }
        stage.on_frame(62.0);
        assert_eq!(page.navbar.mutations(), settled);
    }

    #[test]
    fn features_and_philosophy_reveal_when_reached() {
        let (page, scene) = page();
        let mut stage = bind(scene, MotionConfig::default(), at_scroll(0.0), 0.0);
        while stage.on_frame(30.0) {}
        assert!(page.feature_cards.iter().all(|c| opacity(c) == Some(0.0)));

        // Features top at 1000 hits 80% of an 800px viewport at 360.
        stage.on_scroll(at_scroll(360.0), 31.0);
        while stage.on_frame(40.0) {}
        assert!(page.feature_cards.iter().all(|c| opacity(c) == Some(1.0)));
        assert_eq!(opacity(&page.philosophy[0]), Some(0.0));

        stage.on_scroll(at_scroll(1160.0), 41.0);
        while stage.on_frame(50.0) {}
        assert_eq!(opacity(&page.philosophy[0]), Some(1.0));
        assert_eq!(opacity(&page.philosophy[1]), Some(0.0));
    }

    #[test]
    fn protocol_cards_stack_in_order() {
        let (page, scene) = page();
        let mut stage = bind(scene, MotionConfig::default(), at_scroll(0.0), 0.0);

        let z: Vec<i32> = page.cards.iter().map(|c| c.last().unwrap().z_index.unwrap()).collect();
        assert_eq!(z, vec![3, 2, 1]);
        for card in &page.cards {
            let at_rest = card.last().unwrap();
            assert_eq!(at_rest.scale, Some(1.0));
            assert_eq!(at_rest.opacity, Some(1.0));
            assert_eq!(at_rest.blur, Some(0.0));
        }

        let mut previous = vec![0.0; 3];
        for y in (0..=6000).step_by(40) {
            stage.on_scroll(at_scroll(y as f64), 0.0);
            for (i, card) in page.cards.iter().enumerate() {
                let scale = card.last().unwrap().scale.unwrap();
                let progress = (1.0 - scale) / 0.1;
                assert!(progress + 1e-9 >= previous[i], "card {i} went back at {y}");
                assert!((-1e-9..=1.0 + 1e-9).contains(&progress));
                previous[i] = progress;
            }
        }

        // Past every window, every card sits at full progress.
        for card in &page.cards {
            let end = card.last().unwrap();
            assert!((end.scale.unwrap() - 0.9).abs() < 1e-9);
            assert!((end.opacity.unwrap() - 0.5).abs() < 1e-9);
            assert!((end.blur.unwrap() - 20.0).abs() < 1e-9);
            assert_eq!(end.y, Some(VH));
        }
    }

    #[test]
    fn empty_scene_binds_nothing() {
        let mut stage = bind(Scene::<FakeTarget>::default(), MotionConfig::default(), at_scroll(0.0), 0.0);
        assert_eq!(stage.registration_count(), 0);
        assert!(!stage.on_frame(1.0));
    }

    #[test]
    fn scroll_after_release_mutates_nothing() {
        let (page, scene) = page();
        let mut stage = bind(scene, MotionConfig::default(), at_scroll(0.0), 0.0);
        stage.release();

        let count = |p: &Page| -> usize {
            p.hero_lines
                .iter()
                .chain(&p.feature_cards)
                .chain(&p.philosophy)
                .chain(&p.cards)
                .chain(std::iter::once(&p.navbar))
                .map(FakeTarget::mutations)
                .sum()
        };
        let before = count(&page);
        for y in (0..5000).step_by(100) {
            stage.on_scroll(at_scroll(y as f64), 1.0);
            stage.on_frame(1.0);
        }
        assert_eq!(count(&page), before);
    }
}
