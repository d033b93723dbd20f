// Modal forms, one submodule per dialog

mod student_dialog;
mod transaction_dialog;
