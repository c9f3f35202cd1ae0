use super::*;

#[component]
/// Glass content container.
pub fn Container(
    #[prop(default = ContainerVariant::Default)] variant: ContainerVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_class("ui-container", layout_class)
            data-ui-primitive="true"
            data-ui-kind="container"
            data-ui-variant=variant.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Page section rendered as `<section>`, `<div>`, or `<article>`.
pub fn Section(
    #[prop(default = SectionVariant::Default)] variant: SectionVariant,
    #[prop(default = SectionElement::Section)] element: SectionElement,
    #[prop(optional)] with_gradient: bool,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = merge_class("ui-section", layout_class);
    let content = children();
    let gradient = bool_token(with_gradient);
    match element {
        SectionElement::Section => view! {
            <section
                id=id
                class=class
                aria-label=aria_label
                data-ui-primitive="true"
                data-ui-kind="section"
                data-ui-variant=variant.token()
                data-ui-gradient=gradient
            >
                {content}
            </section>
        }
        .into_view(),
        SectionElement::Div => view! {
            <div
                id=id
                class=class
                aria-label=aria_label
                data-ui-primitive="true"
                data-ui-kind="section"
                data-ui-variant=variant.token()
                data-ui-gradient=gradient
            >
                {content}
            </div>
        }
        .into_view(),
        SectionElement::Article => view! {
            <article
                id=id
                class=class
                aria-label=aria_label
                data-ui-primitive="true"
                data-ui-kind="section"
                data-ui-variant=variant.token()
                data-ui-gradient=gradient
            >
                {content}
            </article>
        }
        .into_view(),
    }
}
