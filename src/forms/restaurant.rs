use std::num::ParseFloatError;

use serde::Deserialize;
use validator::Validate;

use crate::domain::restaurant::NewRestaurant;

#[derive(Clone, Debug, Default, Deserialize, Validate)]
/// Form data for creating a restaurant. The rating is kept as entered text
/// and only converted to a number at submit time.
pub struct RestaurantForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub rating: String,
    #[validate(length(min = 1))]
    pub location: String,
}

impl RestaurantForm {
    pub fn parsed_rating(&self) -> Result<f64, ParseFloatError> {
        self.rating.trim().parse()
    }

    /// Converts the form into a creation payload, parsing the rating text.
    pub fn to_new_restaurant(&self) -> Result<NewRestaurant, ParseFloatError> {
        Ok(NewRestaurant::new(
            self.name.clone(),
            self.parsed_rating()?,
            self.location.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RestaurantForm {
        RestaurantForm {
            name: "Thai House".into(),
            rating: "4.5".into(),
            location: "Bangkok".into(),
        }
    }

    #[test]
    fn rating_text_parses_to_number() {
        let record = filled().to_new_restaurant().unwrap();
        assert_eq!(record.rating, 4.5);
    }

    #[test]
    fn unparseable_rating_is_an_error() {
        let mut form = filled();
        form.rating = "four and a half".into();
        assert!(form.to_new_restaurant().is_err());
    }

    #[test]
    fn empty_fields_fail_validation() {
        assert!(RestaurantForm::default().validate().is_err());
        assert!(filled().validate().is_ok());
    }
}
