//! Conversion between domain posts and their wire/disk form.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Timelike, Utc};

use inkpost_core::domain::Post;
use inkpost_core::error::StoreError;
use inkpost_shared::PostDto;

/// Offset-less layouts accepted for `createdAt`, read as UTC.
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub(crate) fn post_to_dto(post: &Post) -> PostDto {
    PostDto {
        id: post.id,
        title: post.title.clone(),
        content: post.content.clone(),
        created_at: format_created_at(&post.created_at),
    }
}

pub(crate) fn post_from_dto(dto: PostDto) -> Result<Post, StoreError> {
    let created_at = parse_created_at(&dto.created_at).map_err(|e| {
        StoreError::Serialization(format!(
            "post {} has invalid createdAt '{}': {}",
            dto.id, dto.created_at, e
        ))
    })?;

    Ok(Post {
        id: dto.id,
        title: dto.title,
        content: dto.content,
        created_at,
    })
}

/// Decode a whole collection. Records that cannot be decoded are logged and
/// left out rather than failing the listing.
pub(crate) fn posts_from_dtos(dtos: impl IntoIterator<Item = PostDto>) -> Vec<Post> {
    dtos.into_iter()
        .filter_map(|dto| match post_from_dto(dto) {
            Ok(post) => Some(post),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable post");
                None
            }
        })
        .collect()
}

/// Milliseconds for whole-millisecond instants, otherwise as many digits as the
/// value carries.
fn format_created_at(created_at: &DateTime<Utc>) -> String {
    let format = if created_at.nanosecond() % 1_000_000 == 0 {
        SecondsFormat::Millis
    } else {
        SecondsFormat::AutoSi
    };
    created_at.to_rfc3339_opts(format, true)
}

fn parse_created_at(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let rfc3339_err = match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => return Ok(parsed.with_timezone(&Utc)),
        Err(e) => e,
    };

    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
        .map(|naive| naive.and_utc())
        .ok_or(rfc3339_err)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn dto(id: i64, created_at: &str) -> PostDto {
        PostDto {
            id,
            title: "Hello".to_string(),
            content: "<p>Hi</p>".to_string(),
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_timestamp_is_iso_8601_with_millis() {
        let post = Post {
            id: 1,
            title: "Hello".to_string(),
            content: "<p>Hi</p>".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };

        assert_eq!(post_to_dto(&post).created_at, "2024-05-01T12:00:00.000Z");
    }

    #[test]
    fn test_sub_millisecond_timestamps_keep_their_digits() {
        let post = post_from_dto(dto(1, "2024-05-01T12:00:00.123456Z")).unwrap();

        assert_eq!(post_to_dto(&post).created_at, "2024-05-01T12:00:00.123456Z");
    }

    #[test]
    fn test_offset_timestamps_are_normalised_to_utc() {
        let post = post_from_dto(dto(1, "2024-05-01T14:00:00+02:00")).unwrap();
        assert_eq!(post.created_at, Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_offsetless_timestamps_read_as_utc() {
        let noon = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        for raw in [
            "2024-05-01T12:00:00",
            "2024-05-01T12:00:00.000",
            "2024-05-01 12:00:00",
        ] {
            assert_eq!(post_from_dto(dto(1, raw)).unwrap().created_at, noon, "{}", raw);
        }
    }

    #[test]
    fn test_bad_timestamp_is_a_serialization_error() {
        assert!(matches!(
            post_from_dto(dto(1, "yesterday")),
            Err(StoreError::Serialization(_))
        ));
    }

    #[test]
    fn test_collection_decoding_skips_unreadable_records() {
        let posts = posts_from_dtos(vec![
            dto(1, "2024-05-01T12:00:00.000Z"),
            dto(2, "yesterday"),
            dto(3, "2024-05-01T13:00:00"),
        ]);

        let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
