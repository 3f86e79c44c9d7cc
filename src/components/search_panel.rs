use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};

use crate::models::{JobType, SalaryRange, SearchFilter};
use crate::utils::{JOB_CATEGORIES, LOCATION_STATES};

#[derive(Properties, PartialEq)]
pub struct SearchPanelProps {
    pub filter: SearchFilter,
    /// Emits the whole updated filter; the owner resets to page 1
    pub on_change: Callback<SearchFilter>,
}

#[function_component(SearchPanel)]
pub fn search_panel(props: &SearchPanelProps) -> Html {
    let title_ref = use_node_ref();
    let location_ref = use_node_ref();

    // Text fields apply on submit, selects and checkboxes immediately
    let on_submit = {
        let title_ref = title_ref.clone();
        let location_ref = location_ref.clone();
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = filter.clone();
            if let Some(input) = title_ref.cast::<HtmlInputElement>() {
                next.title = input.value();
            }
            if let Some(input) = location_ref.cast::<HtmlInputElement>() {
                next.location = input.value();
            }
            on_change.emit(next);
        })
    };

    let on_job_type = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = filter.clone();
            next.job_type = JobType::parse(&select.value());
            on_change.emit(next);
        })
    };

    let on_salary = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = filter.clone();
            next.salary_range = SalaryRange::from_label(&select.value());
            on_change.emit(next);
        })
    };

    let category_box = |category: &'static str| {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        let checked = filter.categories.iter().any(|c| c == category);
        let onchange = Callback::from(move |_: Event| {
            let mut next = filter.clone();
            next.toggle_category(category);
            on_change.emit(next);
        });
        html! {
            <label class="checkbox">
                <input type="checkbox" {checked} {onchange} />
                {category}
            </label>
        }
    };

    let state_box = |state: &'static str| {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        let checked = filter.location_states.iter().any(|s| s == state);
        let onchange = Callback::from(move |_: Event| {
            let mut next = filter.clone();
            next.toggle_state(state);
            on_change.emit(next);
        });
        html! {
            <label class="checkbox">
                <input type="checkbox" {checked} {onchange} />
                {state}
            </label>
        }
    };

    let on_clear = {
        let on_change = props.on_change.clone();
        Callback::from(move |_| on_change.emit(SearchFilter::default()))
    };

    let job_type_value = props.filter.job_type.map(|t| t.as_str()).unwrap_or("");
    let salary_value = props.filter.salary_range.map(|r| r.label()).unwrap_or("");

    html! {
        <aside class="search-panel">
            <form class="search-form" onsubmit={on_submit}>
                <input ref={title_ref} type="text" placeholder="Job title" value={props.filter.title.clone()} />
                <input ref={location_ref} type="text" placeholder="City" value={props.filter.location.clone()} />
                <button type="submit" class="btn-primary">{"Search"}</button>
            </form>

            <div class="filter-group">
                <label>{"Job type"}</label>
                <select onchange={on_job_type}>
                    <option value="" selected={job_type_value.is_empty()}>{"Any"}</option>
                    { for [JobType::Blue, JobType::White].into_iter().map(|t| html! {
                        <option value={t.as_str()} selected={job_type_value == t.as_str()}>{t.display_name()}</option>
                    }) }
                </select>
            </div>

            <div class="filter-group">
                <label>{"Salary"}</label>
                <select onchange={on_salary}>
                    <option value="" selected={salary_value.is_empty()}>{"Any"}</option>
                    { for SalaryRange::ALL.into_iter().map(|r| html! {
                        <option value={r.label()} selected={salary_value == r.label()}>{r.label()}</option>
                    }) }
                </select>
            </div>

            <div class="filter-group">
                <label>{"Category"}</label>
                { for JOB_CATEGORIES.iter().copied().map(category_box) }
            </div>

            <div class="filter-group">
                <label>{"State"}</label>
                { for LOCATION_STATES.iter().copied().map(state_box) }
            </div>

            if !props.filter.is_empty() {
                <button class="btn-link" onclick={on_clear}>{"Clear filters"}</button>
            }
        </aside>
    }
}
