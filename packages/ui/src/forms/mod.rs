mod create_meditation;

pub use create_meditation::CreateMeditationForm;
