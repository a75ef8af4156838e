//! Endpoint registry for the schedule service routes.

use url::Url;

use super::error::ScheduleError;

/// Version segment embedded in the base URL.
pub const API_VERSION: &str = "v2";

/// Default base URL, including the version segment.
///
/// Endpoint paths are joined onto this, so it must end with a slash.
pub const DEFAULT_BASE_URL: &str = concat!("https://api.rozklad.org.ua/", "v2", "/");

/// Routes exposed by the schedule service.
///
/// Each variant resolves to a relative path under the versioned base URL.
/// ID substitution happens during resolution, so a resolved URL never
/// carries an unresolved placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Study group collection.
    Groups,
    /// Single study group.
    GroupById(i64),
    /// Lessons of a study group.
    GroupLessons(i64),
    /// Teachers giving lessons to a study group.
    GroupTeachers(i64),
    /// Full timetable of a study group.
    GroupTimetable(i64),
    /// Teacher collection.
    Teachers,
    /// Single teacher.
    TeacherById(i64),
    /// Vote data for a teacher.
    TeacherVote(i64),
    /// Vote eligibility for a teacher.
    TeacherCanVote(i64),
    /// Current study week.
    CurrentWeek,
    /// Deployed API version.
    ApiVersion,
}

impl Endpoint {
    /// Renders the relative path for this route.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidArgument`] if the route requires a
    /// resource ID and the supplied value is negative.
    pub fn path(self) -> Result<String, ScheduleError> {
        let path = match self {
            Self::Groups => String::from("groups"),
            Self::GroupById(id) => format!("groups/{}", check_id(id)?),
            Self::GroupLessons(id) => format!("groups/{}/lessons", check_id(id)?),
            Self::GroupTeachers(id) => format!("groups/{}/teachers", check_id(id)?),
            Self::GroupTimetable(id) => format!("groups/{}/timetable", check_id(id)?),
            Self::Teachers => String::from("teachers"),
            Self::TeacherById(id) => format!("teachers/{}", check_id(id)?),
            Self::TeacherVote(id) => format!("teachers/{}/vote", check_id(id)?),
            Self::TeacherCanVote(id) => format!("teachers/{}/canvote", check_id(id)?),
            Self::CurrentWeek => String::from("weeks"),
            Self::ApiVersion => String::from("version"),
        };
        Ok(path)
    }

    /// Resolves this route against a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidArgument`] for a negative resource
    /// ID, or [`ScheduleError::Url`] if the joined URL is invalid.
    pub fn resolve(self, base: &Url) -> Result<Url, ScheduleError> {
        Ok(base.join(&self.path()?)?)
    }
}

/// Rejects IDs that are not representable as non-negative integers.
fn check_id(id: i64) -> Result<i64, ScheduleError> {
    if id < 0 {
        return Err(ScheduleError::InvalidArgument(format!(
            "resource ID must be a non-negative integer, got {id}"
        )));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_collection_paths() {
        // Arrange & Act & Assert
        assert_eq!(Endpoint::Groups.path().unwrap(), "groups");
        assert_eq!(Endpoint::Teachers.path().unwrap(), "teachers");
        assert_eq!(Endpoint::CurrentWeek.path().unwrap(), "weeks");
        assert_eq!(Endpoint::ApiVersion.path().unwrap(), "version");
    }

    #[test]
    fn test_id_paths() {
        // Arrange & Act & Assert
        assert_eq!(Endpoint::GroupById(4344).path().unwrap(), "groups/4344");
        assert_eq!(
            Endpoint::GroupLessons(4344).path().unwrap(),
            "groups/4344/lessons"
        );
        assert_eq!(
            Endpoint::GroupTeachers(4344).path().unwrap(),
            "groups/4344/teachers"
        );
        assert_eq!(
            Endpoint::GroupTimetable(4344).path().unwrap(),
            "groups/4344/timetable"
        );
        assert_eq!(Endpoint::TeacherById(3694).path().unwrap(), "teachers/3694");
        assert_eq!(
            Endpoint::TeacherVote(3694).path().unwrap(),
            "teachers/3694/vote"
        );
        assert_eq!(
            Endpoint::TeacherCanVote(3694).path().unwrap(),
            "teachers/3694/canvote"
        );
    }

    #[test]
    fn test_resolve_against_default_base() {
        // Arrange
        let base = Url::parse(DEFAULT_BASE_URL).unwrap();

        // Act
        let url = Endpoint::GroupTimetable(4344).resolve(&base).unwrap();

        // Assert
        assert_eq!(
            url.as_str(),
            "https://api.rozklad.org.ua/v2/groups/4344/timetable"
        );
    }

    #[test]
    fn test_default_base_carries_version_segment() {
        // Arrange & Act
        let base = Url::parse(DEFAULT_BASE_URL).unwrap();

        // Assert
        assert!(base.path().contains(API_VERSION));
        assert!(DEFAULT_BASE_URL.ends_with('/'));
    }

    #[test]
    fn test_negative_id_is_rejected() {
        // Arrange & Act
        let result = Endpoint::GroupById(-1).path();

        // Assert
        assert!(matches!(result, Err(ScheduleError::InvalidArgument(_))));
    }

    #[test]
    fn test_negative_id_is_rejected_during_resolution() {
        // Arrange
        let base = Url::parse(DEFAULT_BASE_URL).unwrap();

        // Act
        let result = Endpoint::TeacherVote(-42).resolve(&base);

        // Assert
        assert!(matches!(result, Err(ScheduleError::InvalidArgument(_))));
    }

    #[test]
    fn test_resolved_urls_have_no_placeholders() {
        // Arrange
        let base = Url::parse(DEFAULT_BASE_URL).unwrap();
        let endpoints = [
            Endpoint::Groups,
            Endpoint::GroupById(1),
            Endpoint::GroupLessons(1),
            Endpoint::GroupTeachers(1),
            Endpoint::GroupTimetable(1),
            Endpoint::Teachers,
            Endpoint::TeacherById(1),
            Endpoint::TeacherVote(1),
            Endpoint::TeacherCanVote(1),
            Endpoint::CurrentWeek,
            Endpoint::ApiVersion,
        ];

        // Act & Assert
        for endpoint in endpoints {
            let url = endpoint.resolve(&base).unwrap();
            assert!(!url.as_str().contains('{'), "unresolved placeholder: {url}");
        }
    }
}
