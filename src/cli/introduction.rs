use crate::{cli::resource, remote::IntroductionClient, success, warning};

pub async fn show_introduction() {
    let pb = resource::spinner("Fetching introduction...".to_string());

    match IntroductionClient::new().fetch().await {
        Ok(intro) => {
            pb.finish_and_clear();
            println!("{}", intro.content);
        }
        Err(e) => {
            pb.finish_and_clear();
            warning!("Failed to load introduction: {}", e);
        }
    }
}

/// Replaces the introduction text wholesale; the backend keeps a single
/// record for it.
pub async fn set_introduction(content: String) {
    match IntroductionClient::new().save(&content).await {
        Ok(_) => success!("Introduction updated."),
        Err(e) => warning!("Failed to update introduction: {}", e),
    }
}
