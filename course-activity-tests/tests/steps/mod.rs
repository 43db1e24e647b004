mod authoring_steps;
mod free_text_steps;
mod legacy_import_steps;
mod multiple_choice_steps;
