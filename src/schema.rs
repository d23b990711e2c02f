table! {
    appointment (appnt_id) {
        appnt_id -> Integer,
        adate -> Date,
        time_slot -> Varchar,
        status -> Varchar,
    }
}

table! {
    department (dept_id) {
        dept_id -> Integer,
        name -> Varchar,
    }
}

table! {
    doctor (doctor_id) {
        doctor_id -> Integer,
        name -> Varchar,
        specialty -> Varchar,
        did -> Integer,
    }
}

table! {
    has_appointment (appt_id, doctor_id) {
        appt_id -> Integer,
        doctor_id -> Integer,
    }
}

table! {
    patient (patient_id) {
        patient_id -> Integer,
        name -> Varchar,
        gtype -> Varchar,
        age -> Integer,
        address -> Varchar,
        number_of_appts -> Integer,
    }
}

joinable!(doctor -> department (did));
joinable!(has_appointment -> appointment (appt_id));
joinable!(has_appointment -> doctor (doctor_id));

allow_tables_to_appear_in_same_query!(
    appointment,
    department,
    doctor,
    has_appointment,
    patient,
);
