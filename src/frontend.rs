use js_sys::Array;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, Window,
};
use yew::prelude::*;

use crate::anchor::handle_anchor_click;
use crate::content::{
    ABOUT_CARDS, ABOUT_PARAGRAPHS, CONTACT_BLURB, CONTACT_HEADLINE, COPYRIGHT_YEAR, HERO,
    LOGO_TEXT, NAV_LINKS, OWNER, PROJECTS, RESUME_PATH, SKILL_CATEGORIES, SOCIAL_LINKS,
};
use crate::effects::{AnimationConfig, PageEffects};
use crate::entrance::Scheduler;
use crate::nav::NavMenu;
use crate::reveal::{IntersectionReport, IntersectionService, ReportHandler};
use crate::surface::{fragment_id, RenderSurface, HIDDEN_MARKER, REVEAL_MARKER};

struct DomSurface {
    document: Document,
}

impl DomSurface {
    fn current() -> Option<Self> {
        let document = window()?.document()?;
        Some(Self { document })
    }
}

impl RenderSurface for DomSurface {
    type Element = Element;

    fn elements_with_marker(&self, marker: &str) -> Vec<Element> {
        let Ok(nodes) = self.document.query_selector_all(&format!(".{marker}")) else {
            return Vec::new();
        };

        (0..nodes.length())
            .filter_map(|index| nodes.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn has_marker(&self, element: &Element, marker: &str) -> bool {
        element.class_list().contains(marker)
    }

    fn add_marker(&self, element: &Element, marker: &str) {
        let _ = element.class_list().add_1(marker);
    }

    fn smooth_scroll_to(&self, element: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

struct TimeoutScheduler {
    window: Window,
}

/// A `setTimeout` registration. The callback must outlive the timer.
struct PendingTimeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Scheduler for TimeoutScheduler {
    type Handle = PendingTimeout;

    fn schedule(&self, delay: Duration, action: Box<dyn FnOnce()>) -> Option<PendingTimeout> {
        let mut action = Some(action);
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(action) = action.take() {
                action();
            }
        });
        let delay_ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);

        let id = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay_ms,
            )
            .ok()?;

        Some(PendingTimeout {
            id,
            _callback: callback,
        })
    }

    fn cancel(&self, handle: PendingTimeout) {
        self.window.clear_timeout_with_handle(handle.id);
    }
}

struct ViewportObserver;

struct ObserverRegistration {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl Drop for ObserverRegistration {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl IntersectionService<Element> for ViewportObserver {
    type Registration = ObserverRegistration;

    fn watch(
        &self,
        threshold: f64,
        targets: &[Element],
        on_report: ReportHandler<Element>,
    ) -> Option<ObserverRegistration> {
        let callback = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
            let reports = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| IntersectionReport {
                    target: entry.target(),
                    is_intersecting: entry.is_intersecting(),
                })
                .collect();
            on_report(reports);
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;

        for target in targets {
            observer.observe(target);
        }

        Some(ObserverRegistration {
            observer,
            _callback: callback,
        })
    }
}

fn mount_page_effects() -> Option<PageEffects<TimeoutScheduler, ObserverRegistration>> {
    let window = window()?;
    let surface = Rc::new(DomSurface {
        document: window.document()?,
    });
    Some(PageEffects::mount(
        surface,
        TimeoutScheduler { window },
        &ViewportObserver,
        AnimationConfig::default(),
    ))
}

type AnchorCallback = Callback<(MouseEvent, AttrValue)>;

#[derive(Properties, PartialEq)]
struct AnchorLinkProps {
    href: AttrValue,
    on_anchor: AnchorCallback,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    label: Option<AttrValue>,
    #[prop_or_default]
    children: Html,
}

/// Link whose clicks go through the page's anchor handling.
#[function_component(AnchorLink)]
fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_anchor = props.on_anchor.clone();
        Callback::from(move |event: MouseEvent| on_anchor.emit((event, href.clone())))
    };

    html! {
        <a
            href={props.href.clone()}
            class={props.class.clone()}
            aria-label={props.label.clone()}
            onclick={onclick}
        >
            {props.children.clone()}
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct NavbarProps {
    menu: NavMenu,
    on_toggle: Callback<MouseEvent>,
    on_anchor: AnchorCallback,
}

#[function_component(Navbar)]
fn navbar(props: &NavbarProps) -> Html {
    html! {
        <nav class="navbar">
            <div class="container nav-container">
                <AnchorLink href="#home" class="logo" on_anchor={props.on_anchor.clone()}>
                    {LOGO_TEXT}<span class="dot">{"."}</span>
                </AnchorLink>
                <ul class={props.menu.links_class()}>
                    { for NAV_LINKS.iter().map(|link| html! {
                        <li>
                            <AnchorLink href={link.href} on_anchor={props.on_anchor.clone()}>
                                {link.label}
                            </AnchorLink>
                        </li>
                    }) }
                    <li>
                        <a href={RESUME_PATH} class="btn-primary" target="_blank" rel="noopener noreferrer">
                            {"Resume"}
                        </a>
                    </li>
                </ul>
                <button
                    class="hamburger"
                    type="button"
                    aria-label={props.menu.toggle_label()}
                    aria-expanded={props.menu.is_open().to_string()}
                    onclick={props.on_toggle.clone()}
                >
                    <i class={props.menu.icon()} aria-hidden="true"></i>
                </button>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    on_anchor: AnchorCallback,
}

#[function_component(Hero)]
fn hero(props: &SectionProps) -> Html {
    html! {
        <section id="home" class="hero">
            <div class="container hero-wrapper">
                <div class="hero-text">
                    <span class={classes!("greeting", HIDDEN_MARKER)}>{HERO.greeting}</span>
                    <h1 class={classes!("name", HIDDEN_MARKER)}>{OWNER}</h1>
                    <h2 class={classes!("role", HIDDEN_MARKER)}>
                        {HERO.role_lead}<span class="text-gradient">{HERO.role_highlight}</span>
                    </h2>
                    <p class={classes!("bio", HIDDEN_MARKER)}>{HERO.bio}</p>
                    <div class={classes!("cta-buttons", HIDDEN_MARKER)}>
                        <AnchorLink href={HERO.primary_cta.href} class="btn-primary" on_anchor={props.on_anchor.clone()}>
                            {HERO.primary_cta.label}
                        </AnchorLink>
                        <AnchorLink href={HERO.secondary_cta.href} class="btn-secondary" on_anchor={props.on_anchor.clone()}>
                            {HERO.secondary_cta.label}
                        </AnchorLink>
                    </div>
                </div>

                <div class={classes!("hero-image", HIDDEN_MARKER)} style="transition-delay: 0.4s">
                    <div class="photo-blob"></div>
                </div>
            </div>

            <div class="scroll-down">
                <span>{"Scroll"}</span>
                <i class="fas fa-arrow-down" aria-hidden="true"></i>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id="about" class="section">
            <div class="container">
                <h2 class={classes!("section-title", REVEAL_MARKER)}>{"About Me"}</h2>
                <div class="about-grid">
                    <div class={classes!("about-text", REVEAL_MARKER)}>
                        { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                        <div class="stats"></div>
                    </div>
                    <div class={classes!("about-cards", REVEAL_MARKER)}>
                        { for ABOUT_CARDS.iter().map(|card| html! {
                            <div class="card glass">
                                <i class={card.icon} aria-hidden="true"></i>
                                <h3>{card.title}</h3>
                                <p>{card.summary}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Skills)]
fn skills() -> Html {
    html! {
        <section id="skills" class="section">
            <div class="container">
                <h2 class={classes!("section-title", REVEAL_MARKER)}>{"Tech Stack"}</h2>
                <div class="skills-wrapper">
                    { for SKILL_CATEGORIES.iter().map(|category| html! {
                        <div class={classes!("skill-category", REVEAL_MARKER)}>
                            <h3>{category.title}</h3>
                            <div class="skill-tags">
                                { for category.skills.iter().map(|skill| html! { <span>{*skill}</span> }) }
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Projects)]
fn projects(props: &SectionProps) -> Html {
    html! {
        <section id="projects" class="section">
            <div class="container">
                <h2 class={classes!("section-title", REVEAL_MARKER)}>{"Featured Projects"}</h2>
                <div class="projects-grid">
                    { for PROJECTS.iter().map(|project| html! {
                        <div class={classes!("project-card", REVEAL_MARKER)}>
                            <div class="project-image">
                                <div class="overlay">
                                    <AnchorLink
                                        href={project.source_href}
                                        class="icon-link"
                                        label={Some(AttrValue::from(format!("{} source", project.title)))}
                                        on_anchor={props.on_anchor.clone()}
                                    >
                                        <i class="fab fa-github" aria-hidden="true"></i>
                                    </AnchorLink>
                                    <AnchorLink
                                        href={project.live_href}
                                        class="icon-link"
                                        label={Some(AttrValue::from(format!("{} live demo", project.title)))}
                                        on_anchor={props.on_anchor.clone()}
                                    >
                                        <i class="fas fa-external-link-alt" aria-hidden="true"></i>
                                    </AnchorLink>
                                </div>
                                <div class="img-placeholder" style={format!("background: {}", project.backdrop)}></div>
                            </div>
                            <div class="project-info">
                                <h3>{project.title}</h3>
                                <p>{project.summary}</p>
                                <div class="tags">
                                    { for project.tags.iter().map(|tag| html! { <span>{*tag}</span> }) }
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact(props: &SectionProps) -> Html {
    html! {
        <section id="contact" class="section">
            <div class="container">
                <h2 class={classes!("section-title", REVEAL_MARKER)}>{"Get In Touch"}</h2>
                <div class={classes!("contact-wrapper", REVEAL_MARKER)}>
                    <div class="contact-info">
                        <h3>{CONTACT_HEADLINE}</h3>
                        <p>{CONTACT_BLURB}</p>
                        <div class="social-links">
                            { for SOCIAL_LINKS.iter().map(|link| {
                                let icon = html! { <i class={link.icon} aria-hidden="true"></i> };
                                if fragment_id(link.href).is_some() {
                                    html! {
                                        <AnchorLink
                                            href={link.href}
                                            label={Some(AttrValue::from(link.label))}
                                            on_anchor={props.on_anchor.clone()}
                                        >
                                            {icon}
                                        </AnchorLink>
                                    }
                                } else {
                                    html! {
                                        <a
                                            href={link.href}
                                            aria-label={link.label}
                                            target={link.new_tab.then_some("_blank")}
                                            rel={link.new_tab.then_some("noreferrer")}
                                        >
                                            {icon}
                                        </a>
                                    }
                                }
                            }) }
                        </div>
                    </div>
                    <form class="contact-form glass">
                        <div class="form-group">
                            <input type="text" placeholder="Your Name" required={true} />
                        </div>
                        <div class="form-group">
                            <input type="email" placeholder="Your Email" required={true} />
                        </div>
                        <div class="form-group">
                            <textarea rows="5" placeholder="Message" required={true} />
                        </div>
                        <button type="submit" class="btn-primary">{"Send Message"}</button>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[function_component(App)]
fn app() -> Html {
    let menu = use_state(NavMenu::default);

    use_effect_with((), move |_| {
        let effects = mount_page_effects();
        move || drop(effects)
    });

    let on_toggle = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set((*menu).toggled()))
    };

    let on_anchor = {
        let menu = menu.clone();
        Callback::from(move |(event, href): (MouseEvent, AttrValue)| {
            let Some(surface) = DomSurface::current() else {
                return;
            };

            let click = handle_anchor_click(&surface, *menu, Some(href.as_str()));
            if click.prevent_default {
                event.prevent_default();
            }
            if click.menu != *menu {
                menu.set(click.menu);
            }
        })
    };

    html! {
        <>
            <div class="blob blob-1"></div>
            <div class="blob blob-2"></div>

            <Navbar menu={*menu} on_toggle={on_toggle} on_anchor={on_anchor.clone()} />

            <main>
                <Hero on_anchor={on_anchor.clone()} />
                <About />
                <Skills />
                <Projects on_anchor={on_anchor.clone()} />
                <Contact on_anchor={on_anchor} />

                <footer>
                    <p>
                        {"Designed & Built by "}
                        <span class="highlight">{OWNER}</span>
                        {format!(" © {COPYRIGHT_YEAR}")}
                    </p>
                </footer>
            </main>
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
