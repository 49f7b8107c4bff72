//! Dashboard page with learning analytics charts.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. On mount it waits a fixed simulated delay,
//! fabricates analytics, and announces readiness through the notification
//! provider. The pending load is tied to the page's lifetime: leaving the
//! route before it fires drops it without touching disposed state.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::analytics::mock::generate_mock_analytics;
use crate::analytics::series::{
    DashboardSummary, dashboard_summary, learning_trend_series, session_series, skill_distribution,
    skill_progress_series,
};
use crate::analytics::{AnalyticsError, LearningAnalytics};
use crate::components::charts::{DistributionDonut, SessionLineChart, SkillBarChart, TrendAreaChart};
use crate::components::icon::IconView;
use crate::components::metric_card::MetricCard;
use crate::components::skeleton_card::SkeletonCard;
use crate::config::routes::AppRoute;
use crate::icons::Icon;
use crate::state::dashboard::{DashboardState, SIMULATED_LOAD_DELAY, SKELETON_CARDS};
use crate::state::notifications::{NotificationKind, NotificationState};
use crate::util::clock;
use crate::util::task::{CancelToken, spawn_delayed};

pub(crate) const LOADED_TITLE: &str = "Dashboard Loaded";
pub(crate) const LOADED_MESSAGE: &str = "Your learning analytics are ready to view.";

/// One metric card's content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct MetricSpec {
    pub icon: Icon,
    pub tone: &'static str,
    pub label: &'static str,
    pub value: String,
    pub caption: String,
    /// Fill of the inline progress bar, if the card has one.
    pub progress_percent: Option<u32>,
}

pub(crate) fn metric_specs(summary: &DashboardSummary) -> [MetricSpec; 4] {
    [
        MetricSpec {
            icon: Icon::Schedule,
            tone: "primary",
            label: "Total Learning Time",
            value: summary.total_time_label.clone(),
            caption: "+15% from last week".to_owned(),
            progress_percent: None,
        },
        MetricSpec {
            icon: Icon::School,
            tone: "success",
            label: "Skills Mastered",
            value: format!("{} / {}", summary.skills_mastered, summary.skills_total),
            caption: format!("{}% completion rate", summary.mastery_percent),
            progress_percent: Some(summary.mastery_percent),
        },
        MetricSpec {
            icon: Icon::TrendingUp,
            tone: "warning",
            label: "Learning Streak",
            value: format!("{} days", summary.streak_days),
            caption: "Keep it up!".to_owned(),
            progress_percent: None,
        },
        MetricSpec {
            icon: Icon::EmojiEvents,
            tone: "info",
            label: "Next Milestone",
            value: summary.next_milestone.to_owned(),
            caption: format!("{} skills remaining", summary.skills_remaining),
            progress_percent: None,
        },
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct QuickAction {
    pub label: &'static str,
    pub icon: Icon,
    pub route: AppRoute,
    pub primary: bool,
}

pub(crate) const QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction { label: "Continue Learning", icon: Icon::PlayArrow, route: AppRoute::LearningPath, primary: true },
    QuickAction { label: "View Learning Path", icon: Icon::ArrowForward, route: AppRoute::LearningPath, primary: false },
    QuickAction { label: "View Detailed Analytics", icon: Icon::TrendingUp, route: AppRoute::SkillGap, primary: false },
];

/// Finish the simulated load and announce it. Returns `false` if the page
/// was already loaded, in which case no notification is shown.
pub(crate) fn complete_load(
    dashboard: &mut DashboardState,
    notifications: &mut NotificationState,
    analytics: LearningAnalytics,
) -> bool {
    if !dashboard.finish_loading(analytics) {
        return false;
    }
    notifications.show(NotificationKind::Success, LOADED_TITLE, LOADED_MESSAGE, clock::now());
    true
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let dashboard = RwSignal::new(DashboardState::default());

    let alive = CancelToken::new();
    on_cleanup({
        let alive = alive.clone();
        move || alive.cancel()
    });
    spawn_delayed(SIMULATED_LOAD_DELAY, alive, move || {
        let analytics = generate_mock_analytics();
        dashboard.update(|d| {
            notifications.update(|n| {
                complete_load(d, n, analytics);
            });
        });
        log::info!("dashboard analytics loaded");
    });

    view! {
        <Title text=AppRoute::Dashboard.title()/>
        <section class="page page--dashboard">
            <header class="page__header">
                <h1 class="page__title">"Learning Analytics"</h1>
                <Show when=move || !dashboard.with(DashboardState::is_loading)>
                    <p class="page__description">"Track your learning progress and view personalized insights"</p>
                </Show>
            </header>
            {move || match dashboard.get() {
                DashboardState::Loading => {
                    view! {
                        <div class="grid grid--metrics">
                            {(0..SKELETON_CARDS).map(|_| view! { <SkeletonCard/> }).collect_view()}
                        </div>
                    }
                        .into_any()
                }
                DashboardState::Ready(analytics) => dashboard_content(&analytics).into_any(),
            }}
        </section>
    }
}

fn dashboard_content(analytics: &LearningAnalytics) -> Result<impl IntoView + use<>, AnalyticsError> {
    let trend = learning_trend_series(analytics)?;
    let sessions = session_series(analytics)?;
    let bars = skill_progress_series(analytics);
    let distribution = skill_distribution().to_vec();
    let metrics = metric_specs(&dashboard_summary(analytics));

    let cards = metrics
        .into_iter()
        .map(|spec| {
            let progress = spec.progress_percent.map(|percent| {
                view! {
                    <div class="progress" role="progressbar" aria-valuenow=percent>
                        <span class="progress__fill" style=format!("width: {percent}%")></span>
                    </div>
                }
            });
            view! {
                <MetricCard icon=spec.icon tone=spec.tone label=spec.label value=spec.value>
                    {progress}
                    <p class="metric-card__caption">{spec.caption}</p>
                </MetricCard>
            }
        })
        .collect_view();

    let actions = QUICK_ACTIONS
        .iter()
        .map(|action| {
            let class = if action.primary { "button button--contained" } else { "button button--outlined" };
            view! {
                <A href=action.route.path() attr:class=class>
                    <IconView icon=action.icon/>
                    {action.label}
                </A>
            }
        })
        .collect_view();

    Ok(view! {
        <div class="grid grid--metrics">{cards}</div>

        <div class="grid grid--charts">
            <div class="card card--wide">
                <h2 class="card__title">"Learning Progress Over Time"</h2>
                <TrendAreaChart points=trend/>
            </div>
            <div class="card">
                <h2 class="card__title">"Skill Distribution"</h2>
                <DistributionDonut slices=distribution/>
            </div>
        </div>

        <div class="grid grid--halves">
            <div class="card">
                <h2 class="card__title">"Current Skills Progress"</h2>
                <SkillBarChart bars=bars/>
            </div>
            <div class="card">
                <h2 class="card__title">"Recent Learning Sessions"</h2>
                <SessionLineChart points=sessions/>
            </div>
        </div>

        <div class="quick-actions">
            <h2 class="card__title">"Quick Actions"</h2>
            <div class="quick-actions__buttons">{actions}</div>
        </div>
    })
}
