use leptos::prelude::*;

/// Failure messages arrive as one prose string. When the generate flow
/// prefixed it with a "Reason:" delimiter, split it into a bold title and a
/// detail line; otherwise show a generic title over the whole message.
fn split_message(message: &str) -> (String, String) {
    match message.split_once("Reason:") {
        Some((title, detail)) => (title.trim().to_string(), detail.trim().to_string()),
        None => ("Oops!".to_string(), message.trim().to_string()),
    }
}

#[component]
pub fn Alert(message: String) -> impl IntoView {
    let (title, detail) = split_message(&message);

    view! {
        <div class="alert" role="alert">
            <span class="alert-icon">"⚠️"</span>
            <div class="alert-text">
                <p class="alert-title">{title}</p>
                {(!detail.is_empty()).then(|| view! { <p class="alert-detail">{detail}</p> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_reason_delimiter() {
        let (title, detail) =
            split_message("Sorry, we couldn't generate recipes. Reason: Ingredients are required.");
        assert_eq!(title, "Sorry, we couldn't generate recipes.");
        assert_eq!(detail, "Ingredients are required.");
    }

    #[test]
    fn test_plain_message_gets_generic_title() {
        let (title, detail) = split_message("Please add at least one ingredient.");
        assert_eq!(title, "Oops!");
        assert_eq!(detail, "Please add at least one ingredient.");
    }

    #[test]
    fn test_trailing_delimiter_leaves_empty_detail() {
        let (title, detail) = split_message("Something went wrong. Reason:");
        assert_eq!(title, "Something went wrong.");
        assert!(detail.is_empty());
    }
}
