mod formatting;
mod response;
