//! Indian states / union territories and their districts.

/// Preselected state on the info form.
pub const DEFAULT_STATE: &str = "Madhya Pradesh";

pub struct StateDistricts {
    pub state: &'static str,
    pub districts: &'static [&'static str],
}

pub static STATES_WITH_DISTRICTS: &[StateDistricts] = &[
    StateDistricts {
        state: "Andaman and Nicobar Islands",
        districts: &["Nicobar", "North and Middle Andaman", "South Andaman"],
    },
    StateDistricts {
        state: "Andhra Pradesh",
        districts: &[
            "Anantapur", "Chittoor", "East Godavari", "Guntur", "Krishna", "Kurnool",
            "Nellore", "Prakasam", "Srikakulam", "Visakhapatnam", "Vizianagaram",
            "West Godavari", "YSR Kadapa",
        ],
    },
    StateDistricts {
        state: "Arunachal Pradesh",
        districts: &[
            "Anjaw", "Changlang", "East Kameng", "East Siang", "Kurung Kumey", "Lohit",
            "Lower Dibang Valley", "Lower Subansiri", "Papum Pare", "Tawang", "Tirap",
            "Upper Siang", "Upper Subansiri", "West Kameng", "West Siang",
        ],
    },
    StateDistricts {
        state: "Assam",
        districts: &[
            "Baksa", "Barpeta", "Bongaigaon", "Cachar", "Darrang", "Dhemaji", "Dhubri",
            "Dibrugarh", "Goalpara", "Golaghat", "Hailakandi", "Jorhat", "Kamrup",
            "Kamrup Metropolitan", "Karbi Anglong", "Karimganj", "Kokrajhar", "Lakhimpur",
            "Morigaon", "Nagaon", "Nalbari", "Sivasagar", "Sonitpur", "Tinsukia", "Udalguri",
        ],
    },
    StateDistricts {
        state: "Bihar",
        districts: &[
            "Araria", "Arwal", "Aurangabad", "Banka", "Begusarai", "Bhagalpur", "Bhojpur",
            "Buxar", "Darbhanga", "East Champaran", "Gaya", "Gopalganj", "Jamui", "Jehanabad",
            "Kaimur", "Katihar", "Khagaria", "Kishanganj", "Lakhisarai", "Madhepura",
            "Madhubani", "Munger", "Muzaffarpur", "Nalanda", "Nawada", "Patna", "Purnia",
            "Rohtas", "Saharsa", "Samastipur", "Saran", "Sheikhpura", "Sheohar", "Sitamarhi",
            "Siwan", "Supaul", "Vaishali", "West Champaran",
        ],
    },
    StateDistricts {
        state: "Chandigarh",
        districts: &["Chandigarh"],
    },
    StateDistricts {
        state: "Chhattisgarh",
        districts: &[
            "Balod", "Baloda Bazar", "Balrampur", "Bastar", "Bemetara", "Bijapur", "Bilaspur",
            "Dantewada", "Dhamtari", "Durg", "Gariaband", "Janjgir-Champa", "Jashpur",
            "Kabirdham", "Kanker", "Kondagaon", "Korba", "Koriya", "Mahasamund", "Mungeli",
            "Narayanpur", "Raigarh", "Raipur", "Rajnandgaon", "Sukma", "Surajpur", "Surguja",
        ],
    },
    StateDistricts {
        state: "Dadra and Nagar Haveli and Daman and Diu",
        districts: &["Dadra and Nagar Haveli", "Daman", "Diu"],
    },
    StateDistricts {
        state: "Delhi",
        districts: &[
            "Central Delhi", "East Delhi", "New Delhi", "North Delhi", "North East Delhi",
            "North West Delhi", "Shahdara", "South Delhi", "South East Delhi",
            "South West Delhi", "West Delhi",
        ],
    },
    StateDistricts {
        state: "Goa",
        districts: &["North Goa", "South Goa"],
    },
    StateDistricts {
        state: "Gujarat",
        districts: &[
            "Ahmedabad", "Amreli", "Anand", "Aravalli", "Banaskantha", "Bharuch", "Bhavnagar",
            "Botad", "Chhota Udaipur", "Dahod", "Dang", "Devbhoomi Dwarka", "Gandhinagar",
            "Gir Somnath", "Jamnagar", "Junagadh", "Kheda", "Kutch", "Mahisagar", "Mehsana",
            "Morbi", "Narmada", "Navsari", "Panchmahal", "Patan", "Porbandar", "Rajkot",
            "Sabarkantha", "Surat", "Surendranagar", "Tapi", "Vadodara", "Valsad",
        ],
    },
    StateDistricts {
        state: "Haryana",
        districts: &[
            "Ambala", "Bhiwani", "Charkhi Dadri", "Faridabad", "Fatehabad", "Gurugram", "Hisar",
            "Jhajjar", "Jind", "Kaithal", "Karnal", "Kurukshetra", "Mahendragarh", "Nuh",
            "Palwal", "Panchkula", "Panipat", "Rewari", "Rohtak", "Sirsa", "Sonipat",
            "Yamunanagar",
        ],
    },
    StateDistricts {
        state: "Himachal Pradesh",
        districts: &[
            "Bilaspur", "Chamba", "Hamirpur", "Kangra", "Kinnaur", "Kullu", "Lahaul and Spiti",
            "Mandi", "Shimla", "Sirmaur", "Solan", "Una",
        ],
    },
    StateDistricts {
        state: "Jammu and Kashmir",
        districts: &[
            "Anantnag", "Bandipora", "Baramulla", "Budgam", "Doda", "Ganderbal", "Jammu",
            "Kathua", "Kishtwar", "Kulgam", "Kupwara", "Poonch", "Pulwama", "Rajouri", "Ramban",
            "Reasi", "Samba", "Shopian", "Srinagar", "Udhampur",
        ],
    },
    StateDistricts {
        state: "Jharkhand",
        districts: &[
            "Bokaro", "Chatra", "Deoghar", "Dhanbad", "Dumka", "East Singhbhum", "Garhwa",
            "Giridih", "Godda", "Gumla", "Hazaribagh", "Jamtara", "Khunti", "Koderma",
            "Latehar", "Lohardaga", "Pakur", "Palamu", "Ramgarh", "Ranchi", "Sahebganj",
            "Seraikela Kharsawan", "Simdega", "West Singhbhum",
        ],
    },
    StateDistricts {
        state: "Karnataka",
        districts: &[
            "Bagalkot", "Ballari", "Belagavi", "Bengaluru Rural", "Bengaluru Urban", "Bidar",
            "Chamarajanagar", "Chikkaballapur", "Chikkamagaluru", "Chitradurga",
            "Dakshina Kannada", "Davanagere", "Dharwad", "Gadag", "Hassan", "Haveri",
            "Kalaburagi", "Kodagu", "Kolar", "Koppal", "Mandya", "Mysuru", "Raichur",
            "Ramanagara", "Shivamogga", "Tumakuru", "Udupi", "Uttara Kannada", "Vijayapura",
            "Yadgir",
        ],
    },
    StateDistricts {
        state: "Kerala",
        districts: &[
            "Alappuzha", "Ernakulam", "Idukki", "Kannur", "Kasaragod", "Kollam", "Kottayam",
            "Kozhikode", "Malappuram", "Palakkad", "Pathanamthitta", "Thiruvananthapuram",
            "Thrissur", "Wayanad",
        ],
    },
    StateDistricts {
        state: "Ladakh",
        districts: &["Kargil", "Leh"],
    },
    StateDistricts {
        state: "Lakshadweep",
        districts: &["Lakshadweep"],
    },
    StateDistricts {
        state: "Madhya Pradesh",
        districts: &[
            "Agar Malwa", "Alirajpur", "Anuppur", "Ashoknagar", "Balaghat", "Barwani", "Betul",
            "Bhind", "Bhopal", "Burhanpur", "Chhatarpur", "Chhindwara", "Damoh", "Datia",
            "Dewas", "Dhar", "Dindori", "Guna", "Gwalior", "Harda", "Hoshangabad", "Indore",
            "Jabalpur", "Jhabua", "Katni", "Khandwa", "Khargone", "Mandla", "Mandsaur",
            "Morena", "Narsinghpur", "Neemuch", "Niwari", "Panna", "Raisen", "Rajgarh",
            "Ratlam", "Rewa", "Sagar", "Satna", "Sehore", "Seoni", "Shahdol", "Shajapur",
            "Sheopur", "Shivpuri", "Sidhi", "Singrauli", "Tikamgarh", "Ujjain", "Umaria",
            "Vidisha",
        ],
    },
    StateDistricts {
        state: "Maharashtra",
        districts: &[
            "Ahmednagar", "Akola", "Amravati", "Aurangabad", "Beed", "Bhandara", "Buldhana",
            "Chandrapur", "Dhule", "Gadchiroli", "Gondia", "Hingoli", "Jalgaon", "Jalna",
            "Kolhapur", "Latur", "Mumbai City", "Mumbai Suburban", "Nagpur", "Nanded",
            "Nandurbar", "Nashik", "Osmanabad", "Palghar", "Parbhani", "Pune", "Raigad",
            "Ratnagiri", "Sangli", "Satara", "Sindhudurg", "Solapur", "Thane", "Wardha",
            "Washim", "Yavatmal",
        ],
    },
    StateDistricts {
        state: "Manipur",
        districts: &[
            "Bishnupur", "Chandel", "Churachandpur", "Imphal East", "Imphal West", "Jiribam",
            "Kakching", "Kamjong", "Kangpokpi", "Noney", "Pherzawl", "Senapati", "Tamenglong",
            "Tengnoupal", "Thoubal", "Ukhrul",
        ],
    },
    StateDistricts {
        state: "Meghalaya",
        districts: &[
            "East Garo Hills", "East Jaintia Hills", "East Khasi Hills", "North Garo Hills",
            "Ri Bhoi", "South Garo Hills", "South West Garo Hills", "South West Khasi Hills",
            "West Garo Hills", "West Jaintia Hills", "West Khasi Hills",
        ],
    },
    StateDistricts {
        state: "Mizoram",
        districts: &[
            "Aizawl", "Champhai", "Kolasib", "Lawngtlai", "Lunglei", "Mamit", "Saiha", "Serchhip",
        ],
    },
    StateDistricts {
        state: "Nagaland",
        districts: &[
            "Dimapur", "Kiphire", "Kohima", "Longleng", "Mokokchung", "Mon", "Peren", "Phek",
            "Tuensang", "Wokha", "Zunheboto",
        ],
    },
    StateDistricts {
        state: "Odisha",
        districts: &[
            "Angul", "Balangir", "Balasore", "Bargarh", "Bhadrak", "Boudh", "Cuttack", "Deogarh",
            "Dhenkanal", "Gajapati", "Ganjam", "Jagatsinghpur", "Jajpur", "Jharsuguda",
            "Kalahandi", "Kandhamal", "Kendrapara", "Kendujhar", "Khordha", "Koraput",
            "Malkangiri", "Mayurbhanj", "Nabarangpur", "Nayagarh", "Nuapada", "Puri",
            "Rayagada", "Sambalpur", "Subarnapur", "Sundargarh",
        ],
    },
    StateDistricts {
        state: "Puducherry",
        districts: &["Karaikal", "Mahe", "Puducherry", "Yanam"],
    },
    StateDistricts {
        state: "Punjab",
        districts: &[
            "Amritsar", "Barnala", "Bathinda", "Faridkot", "Fatehgarh Sahib", "Fazilka",
            "Ferozepur", "Gurdaspur", "Hoshiarpur", "Jalandhar", "Kapurthala", "Ludhiana",
            "Mansa", "Moga", "Pathankot", "Patiala", "Rupnagar", "Sahibzada Ajit Singh Nagar",
            "Sangrur", "Shaheed Bhagat Singh Nagar", "Sri Muktsar Sahib", "Tarn Taran",
        ],
    },
    StateDistricts {
        state: "Rajasthan",
        districts: &[
            "Ajmer", "Alwar", "Banswara", "Baran", "Barmer", "Bharatpur", "Bhilwara", "Bikaner",
            "Bundi", "Chittorgarh", "Churu", "Dausa", "Dholpur", "Dungarpur", "Hanumangarh",
            "Jaipur", "Jaisalmer", "Jalore", "Jhalawar", "Jhunjhunu", "Jodhpur", "Karauli",
            "Kota", "Nagaur", "Pali", "Pratapgarh", "Rajsamand", "Sawai Madhopur", "Sikar",
            "Sirohi", "Sri Ganganagar", "Tonk", "Udaipur",
        ],
    },
    StateDistricts {
        state: "Sikkim",
        districts: &["East Sikkim", "North Sikkim", "South Sikkim", "West Sikkim"],
    },
    StateDistricts {
        state: "Tamil Nadu",
        districts: &[
            "Ariyalur", "Chengalpattu", "Chennai", "Coimbatore", "Cuddalore", "Dharmapuri",
            "Dindigul", "Erode", "Kallakurichi", "Kanchipuram", "Kanyakumari", "Karur",
            "Krishnagiri", "Madurai", "Nagapattinam", "Namakkal", "Nilgiris", "Perambalur",
            "Pudukkottai", "Ramanathapuram", "Ranipet", "Salem", "Sivaganga", "Tenkasi",
            "Thanjavur", "Theni", "Thoothukudi", "Tiruchirappalli", "Tirunelveli",
            "Tirupathur", "Tiruppur", "Tiruvallur", "Tiruvannamalai", "Tiruvarur", "Vellore",
            "Viluppuram", "Virudhunagar",
        ],
    },
    StateDistricts {
        state: "Telangana",
        districts: &[
            "Adilabad", "Bhadradri Kothagudem", "Hyderabad", "Jagtial", "Jangaon",
            "Jayashankar Bhupalpally", "Jogulamba Gadwal", "Kamareddy", "Karimnagar", "Khammam",
            "Komaram Bheem", "Mahabubabad", "Mahabubnagar", "Mancherial", "Medak",
            "Medchal-Malkajgiri", "Mulugu", "Nagarkurnool", "Nalgonda", "Narayanpet", "Nirmal",
            "Nizamabad", "Peddapalli", "Rajanna Sircilla", "Ranga Reddy", "Sangareddy",
            "Siddipet", "Suryapet", "Vikarabad", "Wanaparthy", "Warangal Rural",
            "Warangal Urban", "Yadadri Bhuvanagiri",
        ],
    },
    StateDistricts {
        state: "Tripura",
        districts: &[
            "Dhalai", "Gomati", "Khowai", "North Tripura", "Sepahijala", "South Tripura",
            "Unakoti", "West Tripura",
        ],
    },
    StateDistricts {
        state: "Uttar Pradesh",
        districts: &[
            "Agra", "Aligarh", "Ambedkar Nagar", "Amethi", "Amroha", "Auraiya", "Ayodhya",
            "Azamgarh", "Baghpat", "Bahraich", "Ballia", "Balrampur", "Banda", "Barabanki",
            "Bareilly", "Basti", "Bhadohi", "Bijnor", "Budaun", "Bulandshahr", "Chandauli",
            "Chitrakoot", "Deoria", "Etah", "Etawah", "Farrukhabad", "Fatehpur", "Firozabad",
            "Gautam Buddha Nagar", "Ghaziabad", "Ghazipur", "Gonda", "Gorakhpur", "Hamirpur",
            "Hapur", "Hardoi", "Hathras", "Jalaun", "Jaunpur", "Jhansi", "Kannauj",
            "Kanpur Dehat", "Kanpur Nagar", "Kasganj", "Kaushambi", "Kheri", "Kushinagar",
            "Lalitpur", "Lucknow", "Maharajganj", "Mahoba", "Mainpuri", "Mathura", "Mau",
            "Meerut", "Mirzapur", "Moradabad", "Muzaffarnagar", "Pilibhit", "Pratapgarh",
            "Prayagraj", "Raebareli", "Rampur", "Saharanpur", "Sambhal", "Sant Kabir Nagar",
            "Shahjahanpur", "Shamli", "Shravasti", "Siddharthnagar", "Sitapur", "Sonbhadra",
            "Sultanpur", "Unnao", "Varanasi",
        ],
    },
    StateDistricts {
        state: "Uttarakhand",
        districts: &[
            "Almora", "Bageshwar", "Chamoli", "Champawat", "Dehradun", "Haridwar", "Nainital",
            "Pauri Garhwal", "Pithoragarh", "Rudraprayag", "Tehri Garhwal", "Udham Singh Nagar",
            "Uttarkashi",
        ],
    },
    StateDistricts {
        state: "West Bengal",
        districts: &[
            "Alipurduar", "Bankura", "Birbhum", "Cooch Behar", "Dakshin Dinajpur", "Darjeeling",
            "Hooghly", "Howrah", "Jalpaiguri", "Jhargram", "Kalimpong", "Kolkata", "Malda",
            "Murshidabad", "Nadia", "North 24 Parganas", "Paschim Bardhaman",
            "Paschim Medinipur", "Purba Bardhaman", "Purba Medinipur", "Purulia",
            "South 24 Parganas", "Uttar Dinajpur",
        ],
    },
];

/// All states and union territories, in table order.
pub fn states() -> impl Iterator<Item = &'static str> {
    STATES_WITH_DISTRICTS.iter().map(|s| s.state)
}

/// Districts of `state`. Empty when no state, or an unknown one, is chosen.
pub fn districts(state: Option<&str>) -> &'static [&'static str] {
    state
        .and_then(find_state)
        .map(|s| s.districts)
        .unwrap_or(&[])
}

pub fn find_state(state: &str) -> Option<&'static StateDistricts> {
    STATES_WITH_DISTRICTS.iter().find(|s| s.state == state)
}

pub fn is_known_state(state: &str) -> bool {
    find_state(state).is_some()
}

pub fn district_belongs_to(state: &str, district: &str) -> bool {
    find_state(state)
        .map(|s| s.districts.contains(&district))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_states_are_unique_and_non_empty() {
        let names: HashSet<&str> = states().collect();
        assert_eq!(names.len(), STATES_WITH_DISTRICTS.len());
        assert_eq!(names.len(), 36);
        assert!(STATES_WITH_DISTRICTS.iter().all(|s| !s.districts.is_empty()));
    }

    #[test]
    fn test_district_lookup() {
        assert!(district_belongs_to("Madhya Pradesh", "Bhopal"));
        assert!(!district_belongs_to("Madhya Pradesh", "Pune"));
        assert!(!district_belongs_to("Atlantis", "Bhopal"));
        assert!(districts(None).is_empty());
        assert!(districts(Some("Atlantis")).is_empty());
        assert!(districts(Some(DEFAULT_STATE)).contains(&"Indore"));
    }
}
