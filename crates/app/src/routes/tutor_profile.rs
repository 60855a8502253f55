use crate::format_helpers::{display_outcome, format_rate, format_rating, parse_rate};
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{
    AppError, Category, CreateTutorProfileRequest, TutorProfile, UpdateTutorProfileRequest,
};
use shared_ui::{
    use_toast, Alert, AlertVariant, Badge, BadgeVariant, Button, Card, CardContent, CardHeader,
    CardTitle, Input, PageHeader, SkeletonCard, Textarea, ToastOptions,
};
use std::collections::HashMap;

const BIO_MAX: usize = 2000;

/// Editable form values, kept as the raw strings the inputs hold.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileDraft {
    pub bio: String,
    pub hourly_rate: String,
    pub experience_years: String,
    pub education: String,
    pub category_ids: Vec<String>,
    pub is_available: bool,
}

impl ProfileDraft {
    pub fn from_profile(profile: &TutorProfile) -> Self {
        Self {
            bio: profile.bio.clone(),
            hourly_rate: format!("{}", profile.hourly_rate),
            experience_years: profile.experience_years.to_string(),
            education: profile.education.clone().unwrap_or_default(),
            category_ids: profile.categories.iter().map(|c| c.id.clone()).collect(),
            is_available: profile.is_available,
        }
    }

    fn parse_numbers(&self) -> Result<(f64, u32), HashMap<String, String>> {
        let mut errors = HashMap::new();
        let rate = parse_rate(&self.hourly_rate);
        if rate.is_none() {
            errors.insert("hourly_rate".to_string(), "Enter a number, e.g. 35".to_string());
        }
        let years = match self.experience_years.trim() {
            "" => Some(0),
            raw => raw.parse::<u32>().ok(),
        };
        if years.is_none() {
            errors.insert(
                "experience_years".to_string(),
                "Enter whole years, e.g. 3".to_string(),
            );
        }
        match (rate, years) {
            (Some(rate), Some(years)) => Ok((rate, years)),
            _ => Err(errors),
        }
    }

    fn education(&self) -> Option<String> {
        let trimmed = self.education.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    pub fn to_create(&self) -> Result<CreateTutorProfileRequest, HashMap<String, String>> {
        let (hourly_rate, experience_years) = self.parse_numbers()?;
        Ok(CreateTutorProfileRequest {
            bio: self.bio.trim().to_string(),
            hourly_rate,
            experience_years,
            education: self.education(),
            category_ids: self.category_ids.clone(),
        })
    }

    /// Only the fields that differ from `original` are sent.
    pub fn to_update(
        &self,
        original: &ProfileDraft,
    ) -> Result<UpdateTutorProfileRequest, HashMap<String, String>> {
        let (hourly_rate, experience_years) = self.parse_numbers()?;
        let (old_rate, old_years) = original.parse_numbers().unwrap_or((f64::NAN, u32::MAX));

        let bio = self.bio.trim();
        let mut old_categories = original.category_ids.clone();
        let mut new_categories = self.category_ids.clone();
        old_categories.sort();
        new_categories.sort();

        Ok(UpdateTutorProfileRequest {
            bio: (bio != original.bio.trim()).then(|| bio.to_string()),
            hourly_rate: (hourly_rate != old_rate).then_some(hourly_rate),
            experience_years: (experience_years != old_years).then_some(experience_years),
            education: (self.education() != original.education())
                .then(|| self.education().unwrap_or_default()),
            category_ids: (new_categories != old_categories).then(|| self.category_ids.clone()),
            is_available: (self.is_available != original.is_available).then_some(self.is_available),
        })
    }
}

fn report_error(
    e: ServerFnError,
    mut field_errors: Signal<HashMap<String, String>>,
    mut form_error: Signal<Option<String>>,
) {
    let err_str = e.to_string();
    let fe = AppError::parse_field_errors(&err_str);
    if fe.is_empty() {
        form_error.set(Some(AppError::friendly_message(&err_str)));
    } else {
        field_errors.set(fe);
    }
}

#[component]
pub fn CreateProfile() -> Element {
    let toast = use_toast();
    let field_errors = use_signal(HashMap::<String, String>::new);
    let form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let categories = use_resource(move || async move {
        display_outcome(server::api::get_tutor_categories().await)
    });

    let on_submit = move |draft: ProfileDraft| {
        let mut field_errors = field_errors;
        let mut form_error = form_error;
        field_errors.set(HashMap::new());
        form_error.set(None);

        let request = match draft.to_create() {
            Ok(request) => request,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };

        spawn(async move {
            saving.set(true);
            match server::api::create_tutor_profile(request).await {
                Ok(result) if result.success => {
                    toast.success("Tutor profile created".to_string(), ToastOptions::new());
                    navigator().push(Route::Dashboard {});
                }
                Ok(result) => {
                    form_error.set(result.error_message().map(str::to_string));
                }
                Err(e) => report_error(e, field_errors, form_error),
            }
            saving.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./tutor_profile.css") }

        div { class: "page",
            PageHeader {
                title: "Create Tutor Profile".to_string(),
                subtitle: "This is what students see when they look for a tutor".to_string(),
            }

            if let Some(msg) = form_error() {
                Alert { variant: AlertVariant::Error, "{msg}" }
            }

            match &*categories.read() {
                Some(Ok(list)) => rsx! {
                    ProfileForm {
                        initial: ProfileDraft::default(),
                        categories: list.clone().unwrap_or_default(),
                        show_availability: false,
                        saving: saving(),
                        errors: field_errors(),
                        submit_label: "Create profile".to_string(),
                        on_submit,
                    }
                },
                Some(Err(msg)) => rsx! {
                    Alert {
                        variant: AlertVariant::Error,
                        title: "Could not load subjects".to_string(),
                        "{msg}"
                    }
                },
                None => rsx! { SkeletonCard { lines: 5 } },
            }
        }
    }
}

#[component]
pub fn UpdateProfile() -> Element {
    let toast = use_toast();
    let field_errors = use_signal(HashMap::<String, String>::new);
    let form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let mut loaded = use_resource(move || async move {
        let profile = display_outcome(server::api::get_tutor_profile().await);
        let categories = display_outcome(server::api::get_tutor_categories().await);
        (profile, categories)
    });

    let on_submit = move |(draft, original): (ProfileDraft, ProfileDraft)| {
        let mut field_errors = field_errors;
        let mut form_error = form_error;
        field_errors.set(HashMap::new());
        form_error.set(None);

        let request = match draft.to_update(&original) {
            Ok(request) => request,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        if request.is_empty() {
            form_error.set(Some("Nothing has changed yet.".to_string()));
            return;
        }

        spawn(async move {
            saving.set(true);
            match server::api::update_tutor_profile(request).await {
                Ok(result) if result.success => {
                    toast.success("Profile updated".to_string(), ToastOptions::new());
                    loaded.restart();
                }
                Ok(result) => {
                    form_error.set(result.error_message().map(str::to_string));
                }
                Err(e) => report_error(e, field_errors, form_error),
            }
            saving.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./tutor_profile.css") }

        div { class: "page",
            PageHeader {
                title: "Update Tutor Profile".to_string(),
                subtitle: "Keep your rate, subjects and availability current".to_string(),
            }

            if let Some(msg) = form_error() {
                Alert { variant: AlertVariant::Error, "{msg}" }
            }

            match &*loaded.read() {
                Some((Ok(Some(profile)), categories)) => {
                    let original = ProfileDraft::from_profile(profile);
                    let initial = original.clone();
                    let categories = match categories {
                        Ok(list) => list.clone().unwrap_or_default(),
                        Err(_) => profile.categories.clone(),
                    };
                    rsx! {
                        ProfileSummary { profile: profile.clone() }
                        ProfileForm {
                            key: "{profile.id}",
                            initial,
                            categories,
                            show_availability: true,
                            saving: saving(),
                            errors: field_errors(),
                            submit_label: "Save changes".to_string(),
                            on_submit: move |draft: ProfileDraft| on_submit((draft, original.clone())),
                        }
                    }
                }
                Some((Ok(None), _)) => rsx! {
                    Alert { variant: AlertVariant::Info, title: "No profile yet".to_string(),
                        "Create your tutor profile first."
                    }
                    Link { to: Route::CreateProfile {}, class: "dashboard-action-link", "Create profile" }
                },
                Some((Err(msg), _)) => rsx! {
                    Alert {
                        variant: AlertVariant::Error,
                        title: "Could not load your profile".to_string(),
                        "{msg}"
                    }
                },
                None => rsx! { SkeletonCard { lines: 5 } },
            }
        }
    }
}

#[component]
fn ProfileSummary(profile: TutorProfile) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "Current profile" }
            }
            CardContent {
                div { class: "profile-summary",
                    span { "Rate: {format_rate(profile.hourly_rate)}" }
                    span { "Rating: {format_rating(profile.average_rating)}" }
                    if profile.is_available {
                        Badge { variant: BadgeVariant::Success, "Accepting students" }
                    } else {
                        Badge { variant: BadgeVariant::Outline, "Not accepting students" }
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileForm(
    initial: ProfileDraft,
    categories: Vec<Category>,
    show_availability: bool,
    saving: bool,
    errors: HashMap<String, String>,
    submit_label: String,
    on_submit: EventHandler<ProfileDraft>,
) -> Element {
    let mut draft = use_signal(|| initial.clone());

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(draft.read().clone());
    };

    rsx! {
        Card {
            CardContent {
                form { class: "form-stack", onsubmit: handle_submit,
                    Textarea {
                        label: "Bio",
                        name: "bio",
                        placeholder: "Tell students how you teach and what you have taught before.",
                        rows: 6,
                        max_length: BIO_MAX,
                        value: draft.read().bio.clone(),
                        error: errors.get("bio").cloned(),
                        on_input: move |e: FormEvent| draft.write().bio = e.value(),
                    }
                    div { class: "profile-form-row",
                        Input {
                            label: "Hourly rate (USD)",
                            name: "hourly_rate",
                            input_type: "text",
                            placeholder: "35",
                            required: true,
                            value: draft.read().hourly_rate.clone(),
                            error: errors.get("hourly_rate").cloned(),
                            on_input: move |e: FormEvent| draft.write().hourly_rate = e.value(),
                        }
                        Input {
                            label: "Years of experience",
                            name: "experience_years",
                            input_type: "number",
                            placeholder: "0",
                            value: draft.read().experience_years.clone(),
                            error: errors.get("experience_years").cloned(),
                            on_input: move |e: FormEvent| draft.write().experience_years = e.value(),
                        }
                    }
                    Input {
                        label: "Education",
                        name: "education",
                        placeholder: "e.g. BSc Mathematics",
                        value: draft.read().education.clone(),
                        on_input: move |e: FormEvent| draft.write().education = e.value(),
                    }

                    fieldset { class: "profile-categories",
                        legend { "Subjects" }
                        if categories.is_empty() {
                            p { class: "muted", "No subjects are available right now." }
                        }
                        for category in categories.iter().cloned() {
                            label { key: "{category.id}", class: "profile-category",
                                input {
                                    r#type: "checkbox",
                                    checked: draft.read().category_ids.contains(&category.id),
                                    onchange: {
                                        let id = category.id.clone();
                                        move |_| toggle(&mut draft.write().category_ids, &id)
                                    },
                                }
                                span { "{category.name}" }
                            }
                        }
                        if let Some(err) = errors.get("category_ids") {
                            p { class: "profile-field-error", "{err}" }
                        }
                    }

                    if show_availability {
                        label { class: "profile-category",
                            input {
                                r#type: "checkbox",
                                checked: draft.read().is_available,
                                onchange: move |_| {
                                    let now = draft.read().is_available;
                                    draft.write().is_available = !now;
                                },
                            }
                            span { "Accepting new students" }
                        }
                    }

                    div { class: "form-actions",
                        Button {
                            button_type: "submit",
                            loading: saving,
                            disabled: saving,
                            "{submit_label}"
                        }
                    }
                }
            }
        }
    }
}

fn toggle(ids: &mut Vec<String>, id: &str) {
    if let Some(pos) = ids.iter().position(|existing| existing == id) {
        ids.remove(pos);
    } else {
        ids.push(id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> TutorProfile {
        TutorProfile {
            id: "tp_1".to_string(),
            user_id: "u_1".to_string(),
            bio: "I have taught algebra for ten years.".to_string(),
            hourly_rate: 40.0,
            experience_years: 10,
            education: Some("BSc Mathematics".to_string()),
            categories: vec![Category {
                id: "math".to_string(),
                name: "Mathematics".to_string(),
                description: None,
            }],
            is_available: true,
            average_rating: Some(4.9),
            created_at: None,
        }
    }

    #[test]
    fn create_parses_numbers_and_trims() {
        let draft = ProfileDraft {
            bio: "  Patient chemistry tutor for all levels.  ".to_string(),
            hourly_rate: "$30".to_string(),
            experience_years: "".to_string(),
            education: "   ".to_string(),
            category_ids: vec!["chem".to_string()],
            is_available: false,
        };
        let request = draft.to_create().unwrap();
        assert_eq!(request.bio, "Patient chemistry tutor for all levels.");
        assert_eq!(request.hourly_rate, 30.0);
        assert_eq!(request.experience_years, 0);
        assert_eq!(request.education, None);
    }

    #[test]
    fn bad_numbers_become_field_errors() {
        let draft = ProfileDraft {
            hourly_rate: "cheap".to_string(),
            experience_years: "a few".to_string(),
            ..Default::default()
        };
        let errors = draft.to_create().unwrap_err();
        assert!(errors.contains_key("hourly_rate"));
        assert!(errors.contains_key("experience_years"));
    }

    #[test]
    fn unchanged_draft_is_empty_update() {
        let original = ProfileDraft::from_profile(&profile());
        let update = original.to_update(&original).unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn update_sends_only_changed_fields() {
        let original = ProfileDraft::from_profile(&profile());
        let mut edited = original.clone();
        edited.hourly_rate = "45".to_string();
        edited.is_available = false;

        let update = edited.to_update(&original).unwrap();
        assert_eq!(update.hourly_rate, Some(45.0));
        assert_eq!(update.is_available, Some(false));
        assert_eq!(update.bio, None);
        assert_eq!(update.category_ids, None);
    }

    #[test]
    fn category_order_is_not_a_change() {
        let mut original = ProfileDraft::from_profile(&profile());
        original.category_ids = vec!["a".to_string(), "b".to_string()];
        let mut edited = original.clone();
        edited.category_ids = vec!["b".to_string(), "a".to_string()];
        assert!(edited.to_update(&original).unwrap().is_empty());
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut ids = vec!["a".to_string()];
        toggle(&mut ids, "b");
        toggle(&mut ids, "a");
        assert_eq!(ids, vec!["b".to_string()]);
    }
}
