//! Timelines for the landing page, in document order.

use crate::config::MotionConfig;
use crate::motion::ease::Ease;
use crate::motion::style::{Keyframe, Length};
use crate::motion::timeline::Timeline;

fn kf() -> Keyframe {
    Keyframe::new()
}

fn vw(v: f64) -> Length {
    Length::Vw(v)
}

fn vh(v: f64) -> Length {
    Length::Vh(v)
}

/// Plays once on load.
pub fn hero_intro(config: &MotionConfig) -> Timeline {
    Timeline::autoplay(config.intro_delay)
        .from_to(".hero-bg", kf().opacity(0.0).scale(1.06), kf().opacity(1.0).scale(1.0), 0.0)
        .duration(1.2)
        .ease(Ease::Power2Out)
        .from_to(".hero-headline-1", kf().y(24).opacity(0.0), kf().y(0).opacity(1.0), 0.1)
        .ease(Ease::Power2Out)
        .from_to(".hero-headline-2", kf().y(24).opacity(0.0), kf().y(0).opacity(1.0), 0.22)
        .ease(Ease::Power2Out)
        .from_to(".hero-subheadline", kf().y(16).opacity(0.0), kf().y(0).opacity(1.0), 0.38)
        .ease(Ease::Power2Out)
        .from_to(
            ".hero-cta",
            kf().y(14).opacity(0.0).scale(0.98),
            kf().y(0).opacity(1.0).scale(1.0),
            0.5,
        )
        .ease(Ease::Power2Out)
        .from_to(".hero-scroll-hint", kf().opacity(0.0), kf().opacity(1.0), 0.85)
        .duration(0.4)
        .ease(Ease::Power2Out)
}

/// Hero holds, then lifts away late in its pin.
pub fn hero_exit(config: &MotionConfig) -> Timeline {
    Timeline::pinned("#hero", config.scrub_lag)
        .reset_on_leave_back()
        .from_to(
            ".hero-headline-group",
            kf().opacity(1.0).y(0).scale(1.0),
            kf().opacity(0.0).y(vh(-10.0)).scale(0.98),
            0.7,
        )
        .ease(Ease::Power2In)
        .from_to(".hero-cta", kf().opacity(1.0).y(0), kf().opacity(0.0).y(vh(-6.0)), 0.7)
        .ease(Ease::Power2In)
        .from_to(".hero-bg", kf().scale(1.0).y(0), kf().scale(1.05).y(vh(-4.0)), 0.7)
        .ease(Ease::Power2In)
}

pub fn problem(config: &MotionConfig) -> Timeline {
    Timeline::pinned("#problem", config.scrub_lag)
        .from_to(
            ".problem-card-left",
            kf().x(vw(-60.0)).opacity(0.0).rotate(-2.0).scale(0.96),
            kf().x(0).opacity(1.0).rotate(0.0).scale(1.0),
            0.0,
        )
        .ease(Ease::None)
        .from_to(
            ".problem-card-right",
            kf().x(vw(60.0)).opacity(0.0).rotate(2.0).scale(0.96),
            kf().x(0).opacity(1.0).rotate(0.0).scale(1.0),
            0.05,
        )
        .ease(Ease::None)
        .from_to(".problem-card-content", kf().y(18).opacity(0.0), kf().y(0).opacity(1.0), 0.1)
        .stagger(0.02)
        .ease(Ease::None)
        .from_to(
            ".problem-card-left",
            kf().x(0).opacity(1.0).rotate(0.0),
            kf().x(vw(-18.0)).opacity(0.0).rotate(-1.0),
            0.7,
        )
        .ease(Ease::Power2In)
        .from_to(
            ".problem-card-right",
            kf().x(0).opacity(1.0).rotate(0.0),
            kf().x(vw(18.0)).opacity(0.0).rotate(1.0),
            0.7,
        )
        .ease(Ease::Power2In)
}

pub fn solution(config: &MotionConfig) -> Timeline {
    Timeline::pinned("#solution", config.scrub_lag)
        .from_to(
            ".solution-card",
            kf().y(vh(100.0)).opacity(0.0).scale(0.92),
            kf().y(0).opacity(1.0).scale(1.0),
            0.0,
        )
        .ease(Ease::None)
        .from_to(".solution-headline", kf().x(vw(-10.0)).opacity(0.0), kf().x(0).opacity(1.0), 0.12)
        .ease(Ease::None)
        .from_to(".solution-subheadline", kf().x(vw(-6.0)).opacity(0.0), kf().x(0).opacity(1.0), 0.18)
        .ease(Ease::None)
        .from_to(
            ".solution-card",
            kf().y(0).opacity(1.0).scale(1.0),
            kf().y(vh(-40.0)).opacity(0.0).scale(0.98),
            0.7,
        )
        .ease(Ease::Power2In)
}

pub fn feature(config: &MotionConfig) -> Timeline {
    Timeline::pinned("#feature", config.scrub_lag)
        .from_to(
            ".feature-card",
            kf().x(vw(60.0)).opacity(0.0).rotate(2.0),
            kf().x(0).opacity(1.0).rotate(0.0),
            0.0,
        )
        .ease(Ease::None)
        .from_to(".feature-headline", kf().y(22).opacity(0.0), kf().y(0).opacity(1.0), 0.1)
        .ease(Ease::None)
        .from_to(".feature-body", kf().y(16).opacity(0.0), kf().y(0).opacity(1.0), 0.15)
        .ease(Ease::None)
        .from_to(
            ".feature-card",
            kf().x(0).opacity(1.0).rotate(0.0),
            kf().x(vw(-18.0)).opacity(0.0).rotate(-1.0),
            0.7,
        )
        .ease(Ease::Power2In)
}

pub fn collective(config: &MotionConfig) -> Timeline {
    Timeline::pinned("#collective", config.scrub_lag)
        .from_to(
            ".collective-card-left",
            kf().x(vw(-60.0)).opacity(0.0).rotate(-2.0),
            kf().x(0).opacity(1.0).rotate(0.0),
            0.0,
        )
        .ease(Ease::None)
        .from_to(
            ".collective-card-right",
            kf().x(vw(60.0)).opacity(0.0).rotate(2.0),
            kf().x(0).opacity(1.0).rotate(0.0),
            0.08,
        )
        .ease(Ease::None)
        .from_to(
            ".collective-progress",
            kf().scale_x(0.0).opacity(0.0),
            kf().scale_x(1.0).opacity(1.0),
            0.18,
        )
        .ease(Ease::None)
        .from_to(".collective-card-left", kf().y(0).opacity(1.0), kf().y(vh(-30.0)).opacity(0.0), 0.7)
        .ease(Ease::Power2In)
        .from_to(".collective-card-right", kf().y(0).opacity(1.0), kf().y(vh(-30.0)).opacity(0.0), 0.72)
        .ease(Ease::Power2In)
}

pub fn story(config: &MotionConfig) -> Timeline {
    Timeline::pinned("#story", config.scrub_lag)
        .from_to(
            ".story-card",
            kf().x(vw(-60.0)).opacity(0.0).rotate(-2.0),
            kf().x(0).opacity(1.0).rotate(0.0),
            0.0,
        )
        .ease(Ease::None)
        .from_to(".story-content", kf().y(20).opacity(0.0), kf().y(0).opacity(1.0), 0.1)
        .stagger(0.03)
        .ease(Ease::None)
        .from_to(
            ".story-card",
            kf().y(0).opacity(1.0).scale(1.0),
            kf().y(vh(-40.0)).opacity(0.0).scale(0.98),
            0.7,
        )
        .ease(Ease::Power2In)
}

/// The join section flows normally; its pieces fade in as they reach the viewport.
pub fn join_reveals(config: &MotionConfig) -> Vec<Timeline> {
    vec![
        Timeline::toggle(".join-headline", config.toggle_start)
            .from_to(".join-headline", kf().y(24).opacity(0.0), kf().y(0).opacity(1.0), 0.0)
            .duration(0.8),
        Timeline::toggle(".join-form-card", config.toggle_start)
            .from_to(".join-form-card", kf().x(vw(10.0)).opacity(0.0), kf().x(0).opacity(1.0), 0.0)
            .duration(0.8),
        Timeline::toggle(".how-it-works-section", config.toggle_start)
            .from_to(
                ".how-it-works-card",
                kf().y(40).opacity(0.0).scale(0.98),
                kf().y(0).opacity(1.0).scale(1.0),
                0.0,
            )
            .duration(0.6)
            .stagger(0.1),
    ]
}

pub fn landing_timelines(config: &MotionConfig) -> Vec<Timeline> {
    let mut timelines = vec![
        hero_exit(config),
        problem(config),
        solution(config),
        feature(config),
        collective(config),
        story(config),
    ];
    timelines.extend(join_reveals(config));
    timelines.push(hero_intro(config));
    timelines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::timeline::tests::RecordingStage;
    use crate::motion::timeline::Trigger;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn pinned_sections_come_first_in_document_order() {
        let timelines = landing_timelines(&MotionConfig::default());
        let pinned: Vec<&str> = timelines
            .iter()
            .filter_map(|t| match &t.trigger {
                Trigger::Pin { section, .. } => Some(section.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            pinned,
            vec!["#hero", "#problem", "#solution", "#feature", "#collective", "#story"]
        );
        assert!(matches!(timelines.last().map(|t| &t.trigger), Some(Trigger::Autoplay { .. })));
    }

    #[test]
    fn only_the_hero_resets_when_scrolled_back_above() {
        let config = MotionConfig::default();
        let resets: Vec<bool> = landing_timelines(&config)
            .iter()
            .filter_map(|t| match &t.trigger {
                Trigger::Pin {
                    reset_on_leave_back, ..
                } => Some(*reset_on_leave_back),
                _ => None,
            })
            .collect();
        assert_eq!(resets, vec![true, false, false, false, false, false]);
    }

    #[test]
    fn pins_use_the_configured_scrub_lag() {
        let config = MotionConfig {
            scrub_lag: 1.5,
            ..MotionConfig::default()
        };
        match story(&config).trigger {
            Trigger::Pin { scrub, .. } => assert_eq!(scrub, 1.5),
            other => panic!("unexpected trigger {:?}", other),
        }
    }

    #[test]
    fn problem_cards_start_offscreen_and_end_drifting_out() {
        let timeline = problem(&MotionConfig::default());
        let mut stage = RecordingStage::new().with_count(".problem-card-content", 4);

        timeline.render_progress(0.0, &mut stage);
        let left = stage.style(".problem-card-left", 0);
        assert!(close(left.x, -600.0));
        assert!(close(left.opacity, 0.0));
        assert!(close(stage.style(".problem-card-right", 0).x, 600.0));
        assert!(close(stage.style(".problem-card-content", 3).opacity, 0.0));

        timeline.render_progress(1.0, &mut stage);
        assert!(close(stage.style(".problem-card-left", 0).x, -180.0));
        assert!(close(stage.style(".problem-card-right", 0).x, 180.0));
        assert!(close(stage.style(".problem-card-content", 3).opacity, 1.0));
    }

    #[test]
    fn cards_rest_in_place_through_the_middle_of_their_pin() {
        let timeline = story(&MotionConfig::default());
        let mut stage = RecordingStage::new().with_count(".story-content", 3);
        // Entrance (last line ends at 0.66) done, exit (0.7) not started.
        timeline.render_at(0.68, &mut stage);
        let card = stage.style(".story-card", 0);
        assert!(close(card.x, 0.0) && close(card.y, 0.0) && close(card.opacity, 1.0));
        assert!(close(stage.style(".story-content", 2).opacity, 1.0));
    }

    #[test]
    fn hero_exit_holds_until_late_in_the_pin() {
        let timeline = hero_exit(&MotionConfig::default());
        let mut stage = RecordingStage::new();
        timeline.render_progress(0.5, &mut stage);
        assert!(close(stage.style(".hero-headline-group", 0).opacity, 1.0));
        timeline.render_progress(1.0, &mut stage);
        let group = stage.style(".hero-headline-group", 0);
        assert!(close(group.opacity, 0.0));
        assert!(close(group.y, -80.0));
    }

    #[test]
    fn intro_starts_hidden_and_lands_on_the_hero_rest_state() {
        let timeline = hero_intro(&MotionConfig::default());
        let mut stage = RecordingStage::new();
        timeline.render_at(0.0, &mut stage);
        assert!(close(stage.style(".hero-cta", 0).opacity, 0.0));
        assert!(close(stage.style(".hero-scroll-hint", 0).opacity, 0.0));

        let end = timeline.total_duration(&stage);
        assert!(close(end, 1.25));
        timeline.render_at(end, &mut stage);
        let intro_cta = stage.style(".hero-cta", 0);

        let mut rest = RecordingStage::new();
        hero_exit(&MotionConfig::default()).render_progress(0.0, &mut rest);
        assert_eq!(intro_cta.opacity, rest.style(".hero-cta", 0).opacity);
        assert_eq!(intro_cta.y, rest.style(".hero-cta", 0).y);
    }

    #[test]
    fn how_it_works_cards_reveal_one_after_another() {
        let reveals = join_reveals(&MotionConfig::default());
        let cards = &reveals[2];
        let mut stage = RecordingStage::new().with_count(".how-it-works-card", 3);
        assert!(close(cards.total_duration(&stage), 0.8));
        cards.render_at(0.1, &mut stage);
        assert!(stage.style(".how-it-works-card", 0).opacity > 0.0);
        assert!(close(stage.style(".how-it-works-card", 2).opacity, 0.0));
        assert!(matches!(
            &cards.trigger,
            Trigger::Toggle { trigger, start } if trigger == ".how-it-works-section" && *start == 0.8
        ));
    }
}
