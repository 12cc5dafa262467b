use super::{InputError, InputSource};
use crate::model::{
    station::StationZoneTable,
    trip::{PeakWindow, TicketType, TimeOfDay, TravelerProfile, TripRequest},
};
use chrono::{NaiveTime, Weekday};

pub const WELCOME_MESSAGE: &str = "Welcome to the London Tube Fare Calculator Game!\n\
    Please answer a few questions to get the best travel advice.\n";

/// what the operator asked for. travelcard holders get advice instead of a fare,
/// so no trip request is built for them.
#[derive(Clone, Debug, PartialEq)]
pub enum CollectedInput {
    Request(TripRequest),
    Travelcard,
}

/// asks the operator for each part of a trip request, re-asking until every
/// answer is valid.
pub struct InputCollector<'a, S: InputSource> {
    source: &'a mut S,
    stations: &'a StationZoneTable,
    peak_windows: &'a [PeakWindow],
}

impl<'a, S: InputSource> InputCollector<'a, S> {
    pub fn new(
        source: &'a mut S,
        stations: &'a StationZoneTable,
        peak_windows: &'a [PeakWindow],
    ) -> InputCollector<'a, S> {
        InputCollector {
            source,
            stations,
            peak_windows,
        }
    }

    /// runs the full questionnaire.
    ///
    /// # Result
    /// a validated request, the travelcard outcome, or an error if the input
    /// source fails or runs out of answers
    pub fn collect(&mut self) -> Result<CollectedInput, InputError> {
        self.source.message(WELCOME_MESSAGE)?;
        let start_station = self.ask_station("Enter the starting station: ")?;
        let destination_station = self.ask_station("Enter the destination station: ")?;
        let time_of_day = self.ask_time_of_day()?;
        let num_travelers = self.ask_positive("How many people are traveling? ")?;
        let mut travelers = Vec::new();
        for traveler_number in 1..=num_travelers {
            travelers.push(self.ask_traveler(traveler_number)?);
        }
        let ticket_type = self.ask_until(
            "Do you have an 'oyster' card, 'contactless' payment, a 'travelcard', or need a 'paper' ticket? ",
            |s| {
                s.parse::<TicketType>().map_err(|_| {
                    String::from("Please choose a valid ticket type: oyster, contactless, travelcard, or paper.\n")
                })
            },
        )?;
        if ticket_type == TicketType::Travelcard {
            log::debug!("travelcard holder, skipping fare calculation");
            return Ok(CollectedInput::Travelcard);
        }
        let duration_days = self.ask_positive("How many days will you be using the Tube? ")?;
        Ok(CollectedInput::Request(TripRequest {
            start_station,
            destination_station,
            time_of_day,
            travelers,
            ticket_type,
            duration_days,
        }))
    }

    fn ask_station(&mut self, prompt: &str) -> Result<String, InputError> {
        let stations = self.stations;
        self.ask_until(prompt, |s| {
            if stations.contains(s) {
                Ok(s.to_string())
            } else {
                Err(String::from("Invalid station name. Please try again.\n"))
            }
        })
    }

    /// time and day are asked as a pair and both re-asked if either is invalid.
    fn ask_time_of_day(&mut self) -> Result<TimeOfDay, InputError> {
        loop {
            let time_answer = self
                .source
                .prompt("Enter the time of travel (HH:MM, 24-hour format): ")?;
            let day_answer = self
                .source
                .prompt("Enter the day of the week (e.g., Monday): ")?;
            match (parse_time(&time_answer), parse_weekday(&day_answer)) {
                (Ok(time), Ok(weekday)) => {
                    return Ok(TimeOfDay::classify(weekday, &time, self.peak_windows));
                }
                _ => self.source.message(
                    "Invalid input. Please enter the time in HH:MM format and a valid day of the week.\n",
                )?,
            }
        }
    }

    fn ask_positive(&mut self, prompt: &str) -> Result<u32, InputError> {
        self.ask_until(prompt, |s| match s.parse::<i64>() {
            Ok(n) if n > 0 => u32::try_from(n)
                .map_err(|_| String::from("Invalid input. Please enter a valid number.\n")),
            Ok(_) => Err(String::from("Please enter a positive number.\n")),
            Err(_) => Err(String::from("Invalid input. Please enter a valid number.\n")),
        })
    }

    fn ask_traveler(&mut self, traveler_number: u32) -> Result<TravelerProfile, InputError> {
        let age = self.ask_until(
            &format!("Enter the age of traveler {traveler_number}: "),
            |s| match s.parse::<i64>() {
                Ok(n) if n < 0 => Err(String::from("Age cannot be negative.\n")),
                Ok(n) => u32::try_from(n)
                    .map_err(|_| String::from("Invalid input. Please enter a valid age.\n")),
                Err(_) => Err(String::from("Invalid input. Please enter a valid age.\n")),
            },
        )?;
        let lives_in_london = self.ask_yes_no("Does this traveler live in London? (yes/no): ")?;
        let has_railcard = self.ask_yes_no("Does this traveler have a railcard? (yes/no): ")?;
        let is_care_leaver = if (18..=25).contains(&age) {
            self.ask_yes_no("Is this traveler a care leaver? (yes/no): ")?
        } else {
            false
        };
        Ok(TravelerProfile {
            age,
            lives_in_london,
            has_railcard,
            is_care_leaver,
        })
    }

    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, InputError> {
        self.ask_until(prompt, |s| match s.to_lowercase().as_str() {
            "yes" | "y" => Ok(true),
            "no" | "n" => Ok(false),
            _ => Err(String::from("Please answer 'yes' or 'no'.\n")),
        })
    }

    /// prompts until `parse` accepts the trimmed answer, showing its error
    /// message after every rejected answer.
    fn ask_until<T, F>(&mut self, prompt: &str, parse: F) -> Result<T, InputError>
    where
        F: Fn(&str) -> Result<T, String>,
    {
        loop {
            let answer = self.source.prompt(prompt)?;
            match parse(answer.trim()) {
                Ok(value) => return Ok(value),
                Err(msg) => self.source.message(&msg)?,
            }
        }
    }
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|e| format!("invalid time '{s}': {e}"))
}

fn parse_weekday(s: &str) -> Result<Weekday, String> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| format!("invalid day of the week '{s}'"))
}

#[cfg(test)]
mod tests {
    use super::{CollectedInput, InputCollector};
    use crate::app::input::{ConsoleInput, InputError};
    use crate::model::station::StationZoneTable;
    use crate::model::trip::{PeakWindow, TicketType, TimeOfDay, TravelerProfile};

    fn stations() -> StationZoneTable {
        let csv = "Station Name,Zone\nBank,1\nWimbledon,3\nUpminster,6\n";
        StationZoneTable::from_reader(csv.as_bytes()).expect("test stations")
    }

    fn windows() -> Vec<PeakWindow> {
        vec![PeakWindow::new(6, 9), PeakWindow::new(16, 19)]
    }

    fn collect(script: &str) -> (Result<CollectedInput, InputError>, String) {
        let table = stations();
        let peak_windows = windows();
        let mut console = ConsoleInput::new(script.as_bytes(), Vec::new());
        let result = InputCollector::new(&mut console, &table, &peak_windows).collect();
        let transcript = String::from_utf8(console.into_writer()).expect("utf8 transcript");
        (result, transcript)
    }

    #[test]
    fn test_collects_a_request() {
        let script = "Bank\nWimbledon\n08:30\nmonday\n1\n35\nno\nno\noyster\n1\n";
        let (result, transcript) = collect(script);
        match result.expect("should collect") {
            CollectedInput::Request(request) => {
                assert_eq!(request.start_station, "Bank");
                assert_eq!(request.destination_station, "Wimbledon");
                assert_eq!(request.time_of_day, TimeOfDay::Peak);
                assert_eq!(request.travelers, vec![TravelerProfile::new(35)]);
                assert_eq!(request.ticket_type, TicketType::Oyster);
                assert_eq!(request.duration_days, 1);
            }
            other => panic!("expected a request, found {other:?}"),
        }
        assert!(transcript.starts_with("Welcome to the London Tube Fare Calculator Game!"));
        assert!(!transcript.contains("care leaver"));
    }

    #[test]
    fn test_reprompts_on_invalid_answers() {
        let script = "Narnia\nBank\n\
            Upminster\n\
            25:00\nMonday\n\
            10:00\nFunday\n\
            18:15\nSaturday\n\
            zero\n0\n2\n\
            -3\nold\n22\nmaybe\nyes\nn\ny\n\
            70\nYES\nNo\n\
            bus pass\nContactless\n\
            -1\n3\n";
        let (result, transcript) = collect(script);
        match result.expect("should collect") {
            CollectedInput::Request(request) => {
                assert_eq!(request.start_station, "Bank");
                assert_eq!(request.destination_station, "Upminster");
                assert_eq!(request.time_of_day, TimeOfDay::OffPeak);
                assert_eq!(
                    request.travelers,
                    vec![
                        TravelerProfile::new(22).with_london_residency().as_care_leaver(),
                        TravelerProfile::new(70).with_london_residency(),
                    ]
                );
                assert_eq!(request.ticket_type, TicketType::Contactless);
                assert_eq!(request.duration_days, 3);
            }
            other => panic!("expected a request, found {other:?}"),
        }
        assert_eq!(transcript.matches("Invalid station name").count(), 1);
        assert_eq!(transcript.matches("HH:MM format and a valid day").count(), 2);
        assert_eq!(transcript.matches("Please enter a valid number").count(), 1);
        assert_eq!(transcript.matches("Please enter a positive number").count(), 2);
        assert_eq!(transcript.matches("Age cannot be negative").count(), 1);
        assert_eq!(transcript.matches("Please enter a valid age").count(), 1);
        assert_eq!(transcript.matches("Please answer 'yes' or 'no'").count(), 1);
        assert_eq!(transcript.matches("Is this traveler a care leaver?").count(), 1);
        assert_eq!(transcript.matches("Please choose a valid ticket type").count(), 1);
    }

    #[test]
    fn test_travelcard_stops_before_duration() {
        let script = "Bank\nWimbledon\n12:00\nTue\n1\n40\nno\nno\nTravelcard\n";
        let (result, transcript) = collect(script);
        assert_eq!(result.expect("should collect"), CollectedInput::Travelcard);
        assert!(!transcript.contains("How many days"));
    }

    #[test]
    fn test_huge_traveler_count_waits_for_travelers() {
        let (result, _) = collect("Bank\nWimbledon\n08:30\nmonday\n4294967295\n");
        match result {
            Err(InputError::EndOfInput(prompt)) => {
                assert_eq!(prompt, "Enter the age of traveler 1:")
            }
            other => panic!("expected end of input, found {other:?}"),
        }
    }

    #[test]
    fn test_running_out_of_answers_is_an_error() {
        let (result, _) = collect("Narnia\nAtlantis\n");
        match result {
            Err(InputError::EndOfInput(prompt)) => {
                assert_eq!(prompt, "Enter the starting station:")
            }
            other => panic!("expected end of input, found {other:?}"),
        }
    }
}
