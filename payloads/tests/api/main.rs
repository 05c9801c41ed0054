mod failures;
mod login;
mod signup;
