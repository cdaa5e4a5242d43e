use error_stack::Report;
use futures::future::try_join_all;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::image::{DependOnImageStorage, ImageStorage};
use kernel::interface::query::{
    BookingQuery, DependOnBookingQuery, DependOnHostelQuery, DependOnRoomQuery, HostelQuery,
    RoomQuery,
};
use kernel::interface::update::{
    BookingModifier, DependOnBookingModifier, DependOnHostelModifier, DependOnRoomModifier,
    HostelModifier, RoomModifier,
};
use kernel::prelude::entity::{
    DateRange, Hostel, HostelDescription, HostelDistance, HostelId, HostelLocation, HostelName,
    HostelRooms, Pictures, Specification,
};
use kernel::KernelError;

use crate::transfer::{
    CreateHostelDto, DeleteHostelDto, GetHostelDto, HostelDto, ReplaceHostelPicturesDto,
    SearchHostelsDto, UpdateHostelDto,
};

pub(crate) const HOSTEL_PICTURES_FOLDER: &str = "Hostelites/hostels";

#[async_trait::async_trait]
pub trait SearchHostelsService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnHostelQuery + DependOnRoomQuery
{
    /// Two-pass availability search: the store filters on location substring
    /// and room count, the populated result is filtered in memory on
    /// occupancy and requested days.
    async fn search_hostels(
        &self,
        dto: SearchHostelsDto,
    ) -> error_stack::Result<Vec<HostelDto>, KernelError> {
        if let Some(person) = dto.person {
            if person < 1 {
                return Err(Report::new(KernelError::Validation(
                    "At least one person required".to_string(),
                )));
            }
        }
        if let Some(min_rooms) = dto.min_rooms {
            if min_rooms < 1 {
                return Err(Report::new(KernelError::Validation(
                    "At least one room required".to_string(),
                )));
            }
        }
        // The range only takes effect when both endpoints are supplied.
        let days = match (dto.check_in, dto.check_out) {
            (Some(start), Some(end)) => DateRange::new(start, end)?.days(),
            _ => Vec::new(),
        };

        let mut connection = self.database_connection().transact().await?;
        let hostels = self
            .hostel_query()
            .find_by_location(
                &mut connection,
                dto.location.as_deref().unwrap_or(""),
                dto.min_rooms.unwrap_or(0),
            )
            .await?;

        let mut populated = Vec::with_capacity(hostels.len());
        for hostel in hostels {
            let rooms = self
                .room_query()
                .find_by_hostel_id(&mut connection, hostel.id())
                .await?;
            populated.push((hostel, rooms));
        }

        // A hostel survives when at least one of its rooms passes every
        // supplied predicate; a room busy on the requested days cannot lend
        // its occupancy fitness to another.
        if dto.person.is_some() || !days.is_empty() {
            let person = dto.person;
            populated.retain(|(_, rooms)| {
                rooms.iter().any(|room| {
                    person.map_or(true, |count| room.suits_occupancy(count))
                        && (days.is_empty() || room.is_free_on(&days))
                })
            });
        }

        Ok(populated
            .into_iter()
            .map(|(hostel, rooms)| HostelDto::from_parts(hostel, rooms))
            .collect())
    }
}

impl<T> SearchHostelsService for T where
    T: DependOnDatabaseConnection + DependOnHostelQuery + DependOnRoomQuery
{
}

#[async_trait::async_trait]
pub trait GetHostelService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnHostelQuery + DependOnRoomQuery
{
    async fn get_hostel(&self, dto: GetHostelDto) -> error_stack::Result<HostelDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = HostelId::new(dto.id);
        let hostel = self
            .hostel_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound("Hostel")))?;
        let rooms = self
            .room_query()
            .find_by_hostel_id(&mut connection, &id)
            .await?;

        Ok(HostelDto::from_parts(hostel, rooms))
    }
}

impl<T> GetHostelService for T where
    T: DependOnDatabaseConnection + DependOnHostelQuery + DependOnRoomQuery
{
}

#[async_trait::async_trait]
pub trait CreateHostelService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnHostelModifier
{
    async fn create_hostel(
        &self,
        dto: CreateHostelDto,
    ) -> error_stack::Result<Uuid, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let uuid = Uuid::new_v4();
        let hostel = Hostel::new(
            HostelId::new(uuid),
            HostelName::new(dto.name),
            HostelLocation::new(dto.location),
            HostelDistance::new(dto.distance),
            Specification::new(dto.specification),
            HostelDescription::new(dto.description),
            Pictures::default(),
            HostelRooms::default(),
        );
        self.hostel_modifier().create(&mut connection, &hostel).await?;

        Ok(uuid)
    }
}

impl<T> CreateHostelService for T where T: DependOnDatabaseConnection + DependOnHostelModifier {}

#[async_trait::async_trait]
pub trait UpdateHostelService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnHostelQuery
    + DependOnRoomQuery
    + DependOnHostelModifier
{
    async fn update_hostel(
        &self,
        dto: UpdateHostelDto,
    ) -> error_stack::Result<HostelDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = HostelId::new(dto.id);
        let hostel = self
            .hostel_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound("Hostel")))?;

        let hostel = hostel.reconstruct(|h| {
            if let Some(name) = dto.name {
                h.name = HostelName::new(name);
            }
            if let Some(location) = dto.location {
                h.location = HostelLocation::new(location);
            }
            if let Some(distance) = dto.distance {
                h.distance = HostelDistance::new(distance);
            }
            if let Some(specification) = dto.specification {
                h.specification = Specification::new(specification);
            }
            if let Some(description) = dto.description {
                h.description = HostelDescription::new(description);
            }
        });
        self.hostel_modifier().update(&mut connection, &hostel).await?;

        let rooms = self
            .room_query()
            .find_by_hostel_id(&mut connection, &id)
            .await?;
        Ok(HostelDto::from_parts(hostel, rooms))
    }
}

impl<T> UpdateHostelService for T where
    T: DependOnDatabaseConnection + DependOnHostelQuery + DependOnRoomQuery + DependOnHostelModifier
{
}

#[async_trait::async_trait]
pub trait ReplaceHostelPicturesService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnHostelQuery
    + DependOnRoomQuery
    + DependOnHostelModifier
    + DependOnImageStorage
{
    /// Uploads the new set, persists it, and only then destroys the previous
    /// assets, so a failure mid-upload never loses the stored pictures.
    async fn replace_hostel_pictures(
        &self,
        dto: ReplaceHostelPicturesDto,
    ) -> error_stack::Result<HostelDto, KernelError> {
        if dto.images.is_empty() {
            return Err(Report::new(KernelError::Validation(
                "Please upload hostel pictures".to_string(),
            )));
        }

        let mut connection = self.database_connection().transact().await?;

        let id = HostelId::new(dto.id);
        let hostel = self
            .hostel_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound("Hostel")))?;

        let uploaded = try_join_all(
            dto.images
                .into_iter()
                .map(|image| self.image_storage().upload(image, HOSTEL_PICTURES_FOLDER)),
        )
        .await?;

        let previous = hostel.pictures().as_ref().clone();
        let hostel = hostel.reconstruct(|h| h.pictures = Pictures::new(uploaded));
        self.hostel_modifier().update(&mut connection, &hostel).await?;

        try_join_all(
            previous
                .iter()
                .map(|picture| self.image_storage().destroy(picture.asset_id())),
        )
        .await?;

        let rooms = self
            .room_query()
            .find_by_hostel_id(&mut connection, &id)
            .await?;
        Ok(HostelDto::from_parts(hostel, rooms))
    }
}

impl<T> ReplaceHostelPicturesService for T where
    T: DependOnDatabaseConnection
        + DependOnHostelQuery
        + DependOnRoomQuery
        + DependOnHostelModifier
        + DependOnImageStorage
{
}

#[async_trait::async_trait]
pub trait DeleteHostelService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnHostelQuery
    + DependOnRoomQuery
    + DependOnBookingQuery
    + DependOnHostelModifier
    + DependOnRoomModifier
    + DependOnBookingModifier
    + DependOnImageStorage
{
    /// Removes the hostel together with everything that exists only because
    /// of it: its rooms, every booking referencing it, and its own picture
    /// assets. Room ids that no longer resolve are skipped so a retried
    /// cascade converges instead of failing.
    async fn delete_hostel(
        &self,
        dto: DeleteHostelDto,
    ) -> error_stack::Result<Vec<HostelDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = HostelId::new(dto.id);
        let hostel = self
            .hostel_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound("Hostel")))?;

        for room_id in hostel.rooms().as_ref() {
            let room = self.room_query().find_by_id(&mut connection, room_id).await?;
            if room.is_some() {
                // Room picture assets stay in the remote store on this path;
                // only the hostel's own pictures are destroyed below.
                self.room_modifier().delete(&mut connection, room_id).await?;
            }
        }

        try_join_all(
            hostel
                .pictures()
                .as_ref()
                .iter()
                .map(|picture| self.image_storage().destroy(picture.asset_id())),
        )
        .await?;

        let bookings = self
            .booking_query()
            .find_by_hostel_id(&mut connection, &id)
            .await?;
        for booking in &bookings {
            self.booking_modifier()
                .delete(&mut connection, booking.id())
                .await?;
        }

        self.hostel_modifier().delete(&mut connection, &id).await?;

        let remaining = self.hostel_query().find_all(&mut connection).await?;
        let mut result = Vec::with_capacity(remaining.len());
        for hostel in remaining {
            let rooms = self
                .room_query()
                .find_by_hostel_id(&mut connection, hostel.id())
                .await?;
            result.push(HostelDto::from_parts(hostel, rooms));
        }
        Ok(result)
    }
}

impl<T> DeleteHostelService for T where
    T: DependOnDatabaseConnection
        + DependOnHostelQuery
        + DependOnRoomQuery
        + DependOnBookingQuery
        + DependOnHostelModifier
        + DependOnRoomModifier
        + DependOnBookingModifier
        + DependOnImageStorage
{
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use uuid::Uuid;

    use kernel::interface::image::UploadImage;
    use kernel::prelude::entity::RoomType;
    use kernel::KernelError;

    use crate::service::memory::{picture, sample_booking, sample_hostel, sample_room, TestModule};
    use crate::service::{
        CreateHostelService, DeleteHostelService, GetHostelService, ReplaceHostelPicturesService,
        SearchHostelsService, UpdateHostelService,
    };
    use crate::transfer::{
        CreateHostelDto, DeleteHostelDto, GetHostelDto, ReplaceHostelPicturesDto, SearchHostelsDto,
        UpdateHostelDto,
    };

    #[tokio::test]
    async fn search_rejects_non_positive_counts() {
        let module = TestModule::new();

        let result = module
            .search_hostels(SearchHostelsDto {
                person: Some(0),
                ..SearchHostelsDto::default()
            })
            .await;
        assert!(matches!(
            result.unwrap_err().current_context(),
            KernelError::Validation(_)
        ));

        let result = module
            .search_hostels(SearchHostelsDto {
                min_rooms: Some(0),
                ..SearchHostelsDto::default()
            })
            .await;
        assert!(matches!(
            result.unwrap_err().current_context(),
            KernelError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn search_rejects_inverted_date_range() {
        let module = TestModule::new();
        let result = module
            .search_hostels(SearchHostelsDto {
                check_in: Some(date!(2024 - 01 - 02)),
                check_out: Some(date!(2024 - 01 - 01)),
                ..SearchHostelsDto::default()
            })
            .await;
        assert!(matches!(
            result.unwrap_err().current_context(),
            KernelError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn search_matches_location_substring_case_insensitively() {
        let module = TestModule::new();
        let pune = Uuid::new_v4();
        let goa = Uuid::new_v4();
        {
            let mut state = module.database().state();
            state
                .hostels
                .insert(pune, sample_hostel(pune, "Pune", vec![], vec![]));
            state
                .hostels
                .insert(goa, sample_hostel(goa, "Goa", vec![], vec![]));
        }

        let found = module
            .search_hostels(SearchHostelsDto {
                location: Some("pUn".to_string()),
                ..SearchHostelsDto::default()
            })
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, pune);

        let all = module
            .search_hostels(SearchHostelsDto::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn search_honors_minimum_room_count() {
        let module = TestModule::new();
        let small = Uuid::new_v4();
        let big = Uuid::new_v4();
        let room_a = Uuid::new_v4();
        let room_b = Uuid::new_v4();
        {
            let mut state = module.database().state();
            state
                .hostels
                .insert(small, sample_hostel(small, "Pune", vec![], vec![]));
            state
                .hostels
                .insert(big, sample_hostel(big, "Pune", vec![room_a, room_b], vec![]));
            state
                .rooms
                .insert(room_a, sample_room(room_a, big, 1, RoomType::Single, vec![], vec![]));
            state
                .rooms
                .insert(room_b, sample_room(room_b, big, 2, RoomType::Double, vec![], vec![]));
        }

        let found = module
            .search_hostels(SearchHostelsDto {
                min_rooms: Some(2),
                ..SearchHostelsDto::default()
            })
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, big);
        assert_eq!(found[0].rooms.len(), 2);
    }

    #[tokio::test]
    async fn search_excludes_hostel_whose_rooms_overlap_requested_days() {
        let module = TestModule::new();
        let hostel = Uuid::new_v4();
        let room = Uuid::new_v4();
        {
            let mut state = module.database().state();
            state
                .hostels
                .insert(hostel, sample_hostel(hostel, "Pune", vec![room], vec![]));
            state.rooms.insert(
                room,
                sample_room(
                    room,
                    hostel,
                    1,
                    RoomType::Single,
                    vec![date!(2024 - 01 - 02)],
                    vec![],
                ),
            );
        }

        let booked = module
            .search_hostels(SearchHostelsDto {
                check_in: Some(date!(2024 - 01 - 01)),
                check_out: Some(date!(2024 - 01 - 03)),
                ..SearchHostelsDto::default()
            })
            .await
            .unwrap();
        assert!(booked.is_empty());

        let free = module
            .search_hostels(SearchHostelsDto {
                check_in: Some(date!(2024 - 01 - 03)),
                check_out: Some(date!(2024 - 01 - 04)),
                ..SearchHostelsDto::default()
            })
            .await
            .unwrap();
        assert_eq!(free.len(), 1);
    }

    #[tokio::test]
    async fn one_room_must_satisfy_occupancy_and_dates_together() {
        let module = TestModule::new();
        let hostel = Uuid::new_v4();
        let single = Uuid::new_v4();
        let double = Uuid::new_v4();
        {
            let mut state = module.database().state();
            state
                .hostels
                .insert(hostel, sample_hostel(hostel, "Pune", vec![single, double], vec![]));
            state.rooms.insert(
                single,
                sample_room(single, hostel, 1, RoomType::Single, vec![], vec![]),
            );
            state.rooms.insert(
                double,
                sample_room(
                    double,
                    hostel,
                    2,
                    RoomType::Double,
                    vec![date!(2024 - 01 - 01)],
                    vec![],
                ),
            );
        }

        // The only double is taken on the requested day; the free single
        // cannot host two people.
        let taken = module
            .search_hostels(SearchHostelsDto {
                person: Some(2),
                check_in: Some(date!(2024 - 01 - 01)),
                check_out: Some(date!(2024 - 01 - 01)),
                ..SearchHostelsDto::default()
            })
            .await
            .unwrap();
        assert!(taken.is_empty());

        let free = module
            .search_hostels(SearchHostelsDto {
                person: Some(2),
                check_in: Some(date!(2024 - 02 - 01)),
                check_out: Some(date!(2024 - 02 - 01)),
                ..SearchHostelsDto::default()
            })
            .await
            .unwrap();
        assert_eq!(free.len(), 1);

        // A lone guest fits the single even on the booked day.
        let lone = module
            .search_hostels(SearchHostelsDto {
                person: Some(1),
                check_in: Some(date!(2024 - 01 - 01)),
                check_out: Some(date!(2024 - 01 - 01)),
                ..SearchHostelsDto::default()
            })
            .await
            .unwrap();
        assert_eq!(lone.len(), 1);
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let module = TestModule::new();
        let id = module
            .create_hostel(CreateHostelDto {
                name: "Hilltop".to_string(),
                location: "Manali".to_string(),
                distance: 3.5,
                specification: vec!["parking".to_string()],
                description: "quiet".to_string(),
            })
            .await
            .unwrap();

        let hostel = module.get_hostel(GetHostelDto { id }).await.unwrap();
        assert_eq!(hostel.name, "Hilltop");
        assert_eq!(hostel.location, "Manali");
        assert!(hostel.rooms.is_empty());
    }

    #[tokio::test]
    async fn update_replaces_only_supplied_fields() {
        let module = TestModule::new();
        let id = Uuid::new_v4();
        module
            .database()
            .state()
            .hostels
            .insert(id, sample_hostel(id, "Pune", vec![], vec![]));

        let updated = module
            .update_hostel(UpdateHostelDto {
                id,
                name: Some("Renamed".to_string()),
                location: None,
                distance: None,
                specification: None,
                description: None,
            })
            .await
            .unwrap();
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.location, "Pune");
    }

    #[tokio::test]
    async fn update_missing_hostel_is_not_found() {
        let module = TestModule::new();
        let result = module
            .update_hostel(UpdateHostelDto {
                id: Uuid::new_v4(),
                name: None,
                location: None,
                distance: None,
                specification: None,
                description: None,
            })
            .await;
        assert!(matches!(
            result.unwrap_err().current_context(),
            KernelError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn delete_cascades_to_rooms_bookings_and_hostel_assets() {
        let module = TestModule::new();
        let hostel = Uuid::new_v4();
        let other = Uuid::new_v4();
        let room_a = Uuid::new_v4();
        let room_b = Uuid::new_v4();
        let booking_a = Uuid::new_v4();
        let booking_b = Uuid::new_v4();
        {
            let mut state = module.database().state();
            state.hostels.insert(
                hostel,
                sample_hostel(hostel, "Pune", vec![room_a, room_b], vec![picture("hostel-pic")]),
            );
            state
                .hostels
                .insert(other, sample_hostel(other, "Goa", vec![], vec![]));
            state.rooms.insert(
                room_a,
                sample_room(room_a, hostel, 1, RoomType::Single, vec![], vec![picture("room-pic")]),
            );
            state.rooms.insert(
                room_b,
                sample_room(room_b, hostel, 2, RoomType::Double, vec![], vec![]),
            );
            state
                .bookings
                .insert(booking_a, sample_booking(booking_a, hostel, room_a));
            state
                .bookings
                .insert(booking_b, sample_booking(booking_b, hostel, room_b));
        }

        let remaining = module
            .delete_hostel(DeleteHostelDto { id: hostel })
            .await
            .unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, other);

        let state = module.database().state();
        assert!(!state.hostels.contains_key(&hostel));
        assert!(state.rooms.is_empty());
        assert!(state.bookings.is_empty());
        drop(state);

        // Hostel assets go; room assets are left behind on this path.
        let calls = module.images().calls();
        assert!(calls.contains(&"destroy:hostel-pic".to_string()));
        assert!(!calls.iter().any(|call| call == "destroy:room-pic"));
    }

    #[tokio::test]
    async fn delete_missing_hostel_is_not_found() {
        let module = TestModule::new();
        let result = module
            .delete_hostel(DeleteHostelDto { id: Uuid::new_v4() })
            .await;
        assert!(matches!(
            result.unwrap_err().current_context(),
            KernelError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn delete_skips_room_ids_that_no_longer_resolve() {
        let module = TestModule::new();
        let hostel = Uuid::new_v4();
        let dangling = Uuid::new_v4();
        module
            .database()
            .state()
            .hostels
            .insert(hostel, sample_hostel(hostel, "Pune", vec![dangling], vec![]));

        let remaining = module
            .delete_hostel(DeleteHostelDto { id: hostel })
            .await
            .unwrap();
        assert!(remaining.is_empty());
    }

    #[tokio::test]
    async fn picture_replacement_requires_at_least_one_file() {
        let module = TestModule::new();
        let result = module
            .replace_hostel_pictures(ReplaceHostelPicturesDto {
                id: Uuid::new_v4(),
                images: vec![],
            })
            .await;
        assert!(matches!(
            result.unwrap_err().current_context(),
            KernelError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn picture_replacement_uploads_persists_then_destroys() {
        let module = TestModule::new();
        let hostel = Uuid::new_v4();
        module
            .database()
            .state()
            .hostels
            .insert(hostel, sample_hostel(hostel, "Pune", vec![], vec![picture("old-pic")]));

        let updated = module
            .replace_hostel_pictures(ReplaceHostelPicturesDto {
                id: hostel,
                images: vec![UploadImage::new("front.jpg", vec![0xffu8, 0xd8])],
            })
            .await
            .unwrap();
        assert_eq!(updated.pictures.len(), 1);
        assert!(updated.pictures[0].asset_id.ends_with("front.jpg"));

        let calls = module.images().calls();
        let upload_at = calls.iter().position(|call| call.starts_with("upload:"));
        let destroy_at = calls.iter().position(|call| call == "destroy:old-pic");
        assert!(upload_at.unwrap() < destroy_at.unwrap());
    }
}
